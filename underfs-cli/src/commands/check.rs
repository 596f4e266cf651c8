//! Check command: resolve a factory for a URI and construct its client.

use anyhow::{Context, Result};
use std::io::Write;

use super::Session;

/// Run the check command, reporting to `out`.
pub fn run_check(session: &Session, uri: &str, out: &mut impl Write) -> Result<()> {
    let registry = session.registry();

    let factory = registry.find(uri).with_context(|| {
        format!(
            "No under file system supports '{}' (registered: {})",
            uri,
            registry.names().join(", ")
        )
    })?;
    writeln!(out, "Factory:  {}", factory.name())?;

    let ufs = factory
        .create(uri, None)
        .with_context(|| format!("Failed to create under file system for '{}'", uri))?;

    writeln!(out, "Type:     {}", ufs.ufs_type())?;
    writeln!(out, "Root:     {}", ufs.root())?;
    writeln!(out, "Client:   {:?}", ufs)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(defines: &[&str]) -> Session {
        let defines: Vec<String> = defines.iter().map(|s| s.to_string()).collect();
        Session::open(None, &defines).unwrap()
    }

    #[test]
    fn test_check_simulated() {
        let session = session(&["fs.swift.simulation=true"]);
        let mut out = Vec::new();

        run_check(&session, "swift://container/logs", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Factory:  swift"));
        assert!(text.contains("Root:     swift://container/logs"));
        assert!(text.contains("simulated: true"));
    }

    #[test]
    fn test_check_unsupported_scheme() {
        let session = session(&[]);
        let mut out = Vec::new();

        let err = run_check(&session, "hdfs://namenode/x", &mut out).unwrap_err();
        assert!(err.to_string().contains("No under file system supports"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_reports_cause_chain() {
        let session = session(&[
            "fs.swift.user=alice",
            "fs.swift.tenant=analytics",
            "fs.swift.apikey=key",
            "fs.swift.auth.url=https://keystone.example.com/v2.0",
            "fs.swift.auth.method=kerberos",
        ]);
        let mut out = Vec::new();

        let err = run_check(&session, "swift://container", &mut out).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to create under file system"));
        assert!(chain.contains("Unsupported Swift auth method: kerberos"));
    }
}
