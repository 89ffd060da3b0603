//! Startup provisioning: export bundled assets, then bring the database up.
//!
//! Exported files are overwritten on every start; they are a convenience copy
//! for inspection and manual setup, the server itself renders from memory.

use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::{Config, ProvisionConfig};
use crate::db::{RegistryStorage, SQLITE_INIT};
use crate::error::RegistryError;
use crate::render::TEMPLATES;

const FEATURES_TEXT: &str = "CRUD for students, courses, enrollments; \
    bundled templates and SQL schema; database bootstrap on startup";

/// Files written by [`export_assets`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExportedAssets {
    pub templates: Vec<PathBuf>,
    pub schema_file: Option<PathBuf>,
}

/// Write the template documents and the DDL to disk, replacing existing copies.
pub fn export_assets(cfg: &ProvisionConfig) -> Result<ExportedAssets, RegistryError> {
    fs::create_dir_all(&cfg.templates_dir)?;
    let templates = TEMPLATES
        .iter()
        .map(|(name, contents)| {
            let target = cfg.templates_dir.join(name);
            fs::write(&target, contents)?;
            Ok(target)
        })
        .collect::<Result<Vec<_>, std::io::Error>>()?;

    if let Some(parent) = cfg.schema_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&cfg.schema_file, SQLITE_INIT.trim_start())?;

    Ok(ExportedAssets {
        templates,
        schema_file: Some(cfg.schema_file.clone()),
    })
}

/// Make the application runnable from a clean checkout. Any failure aborts startup.
pub async fn provision(cfg: &Config) -> Result<RegistryStorage, RegistryError> {
    let exported = if cfg.provision.export_assets {
        export_assets(&cfg.provision)?
    } else {
        ExportedAssets::default()
    };

    let storage = RegistryStorage::connect(&cfg.database).await?;

    log_summary(cfg, &exported);
    Ok(storage)
}

fn log_summary(cfg: &Config, exported: &ExportedAssets) {
    info!(features = FEATURES_TEXT, "student registry ready");
    info!(
        database = %cfg.database.file_path().display(),
        listen = %cfg.server.listen,
        "visit http://{} in a browser",
        cfg.server.listen
    );
    if let Some(schema) = exported.schema_file.as_deref() {
        info!(
            templates_dir = %cfg.provision.templates_dir.display(),
            templates = exported.templates.len(),
            schema_file = %schema.display(),
            "bundled assets exported"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{enrollments, students};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "registry-{tag}-{}-{}",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn export_overwrites_existing_files() {
        let root = scratch_dir("export");
        let cfg = ProvisionConfig {
            export_assets: true,
            templates_dir: root.join("templates"),
            schema_file: root.join("sql").join("setup_database.sql"),
        };
        fs::create_dir_all(&cfg.templates_dir).unwrap();
        fs::write(cfg.templates_dir.join("index.html"), "stale").unwrap();

        let exported = export_assets(&cfg).expect("export should succeed");

        assert_eq!(exported.templates.len(), 4);
        let index = fs::read_to_string(cfg.templates_dir.join("index.html")).unwrap();
        assert!(index.contains("Student Management System"));
        let schema = fs::read_to_string(&cfg.schema_file).unwrap();
        assert!(schema.starts_with("CREATE TABLE IF NOT EXISTS student"));

        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn provision_exports_assets_and_creates_tables() {
        let root = scratch_dir("provision");
        let mut cfg = Config::default();
        cfg.provision.templates_dir = root.join("templates");
        cfg.provision.schema_file = root.join("setup_database.sql");
        cfg.database.dir = root.join("data");

        let storage = provision(&cfg).await.expect("provision should succeed");

        assert!(cfg.provision.templates_dir.join("enrollments.html").is_file());
        assert!(cfg.provision.schema_file.is_file());
        assert!(cfg.database.file_path().is_file());

        let mut conn = storage.acquire().await.expect("acquire");
        assert!(students::list(&mut conn).await.expect("list students").is_empty());
        assert!(enrollments::list(&mut conn).await.expect("list enrollments").is_empty());
        drop(conn);

        // A second start over the same directory keeps working.
        provision(&cfg).await.expect("second provision should succeed");

        let _ = fs::remove_dir_all(&root);
    }
}
