//! Executes parsed commands against a store and renders their results.
//!
//! [`execute`] performs the store call and returns an [`Output`];
//! [`Output::render`] turns it into the text printed on stdout.  Keeping the
//! two apart lets tests check results without capturing stdout.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tracing::warn;

use dotstore_core::{DirectoryResolver, Resolved, Scope, ScopedStore};

use crate::cli::{scope_for, Command};

/// The result of one command, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Keys(Vec<String>),
    Value(Resolved),
    Saved(Scope),
    Removed(Scope),
    Path(PathBuf),
    Entries(BTreeMap<String, String>),
}

#[derive(Serialize)]
struct ScopeJson {
    scope: Scope,
}

impl Output {
    /// Renders the output as plain text or JSON.
    ///
    /// Plain text always ends with a newline unless it is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON or TOML serialization fails.
    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            let text = match self {
                Output::Keys(keys) => serde_json::to_string(keys)?,
                Output::Value(resolved) => serde_json::to_string(resolved)?,
                Output::Saved(scope) | Output::Removed(scope) => {
                    serde_json::to_string(&ScopeJson { scope: *scope })?
                }
                Output::Path(path) => serde_json::to_string(&path.display().to_string())?,
                Output::Entries(entries) => serde_json::to_string(entries)?,
            };
            return Ok(text + "\n");
        }

        let text = match self {
            Output::Keys(keys) => keys.iter().map(|k| format!("{k}\n")).collect::<String>(),
            Output::Value(resolved) => with_trailing_newline(&resolved.value),
            Output::Saved(_) => String::new(),
            Output::Removed(scope) => format!("removed {scope} entry\n"),
            Output::Path(path) => format!("{}\n", path.display()),
            Output::Entries(entries) => {
                toml::to_string(entries).context("failed to render entries as TOML")?
            }
        };
        Ok(text)
    }
}

fn with_trailing_newline(value: &str) -> String {
    if value.is_empty() || value.ends_with('\n') {
        value.to_string()
    } else {
        format!("{value}\n")
    }
}

/// Runs `command` against `store`.
///
/// # Errors
///
/// Returns the store error wrapped with the namespace/key being worked on.
pub fn execute<R: DirectoryResolver>(
    store: &ScopedStore<R>,
    command: &Command,
) -> anyhow::Result<Output> {
    match command {
        Command::List { namespace, local } => {
            let scope = scope_for(*local);
            let keys = store
                .list_in(scope, namespace)
                .with_context(|| format!("failed to list {scope} namespace '{namespace}'"))?;
            Ok(Output::Keys(keys))
        }

        Command::Get {
            namespace,
            key,
            global_only,
        } => {
            let resolved = if *global_only {
                store.load_global(namespace, key).map(|value| Resolved {
                    scope: Scope::Global,
                    value,
                })
            } else {
                store.load_resolved(namespace, key)
            };
            let resolved = resolved.with_context(|| format!("failed to read {namespace}/{key}"))?;
            Ok(Output::Value(resolved))
        }

        Command::Set {
            namespace,
            key,
            value,
            local,
        } => {
            let scope = scope_for(*local);
            store
                .save_in(scope, namespace, key, value)
                .with_context(|| format!("failed to write {scope} {namespace}/{key}"))?;
            Ok(Output::Saved(scope))
        }

        Command::Delete {
            namespace,
            key,
            global_only,
        } => {
            let removed = if *global_only {
                store.delete_global(namespace, key).map(|()| Scope::Global)
            } else {
                store.delete_local_or_global_resolved(namespace, key)
            };
            let scope = removed.with_context(|| format!("failed to delete {namespace}/{key}"))?;
            Ok(Output::Removed(scope))
        }

        Command::Path {
            namespace,
            key,
            local,
        } => {
            let path = store
                .entry_path(scope_for(*local), namespace, key)
                .context("failed to resolve entry path")?;
            Ok(Output::Path(path))
        }

        Command::Export { namespace, local } => {
            let scope = scope_for(*local);
            export(store, scope, namespace).map(Output::Entries)
        }
    }
}

/// Reads every key of `namespace` in `scope`.  Unreadable entries, such as
/// nested directories, are skipped with a warning.
fn export<R: DirectoryResolver>(
    store: &ScopedStore<R>,
    scope: Scope,
    namespace: &str,
) -> anyhow::Result<BTreeMap<String, String>> {
    let keys = store
        .list_in(scope, namespace)
        .with_context(|| format!("failed to list {scope} namespace '{namespace}'"))?;

    let mut entries = BTreeMap::new();
    for key in keys {
        match store.load_from(scope, namespace, &key) {
            Ok(value) => {
                entries.insert(key, value);
            }
            Err(e) => warn!("skipping {namespace}/{key}: {e}"),
        }
    }
    Ok(entries)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dotstore_core::FixedResolver;
    use uuid::Uuid;

    struct Sandbox {
        scratch: PathBuf,
        store: ScopedStore<FixedResolver>,
    }

    impl Sandbox {
        fn new() -> Self {
            let scratch = std::env::temp_dir().join(format!("dotstore_cli_test_{}", Uuid::new_v4()));
            let resolver = FixedResolver::new(scratch.join("home"), scratch.join("cwd"));
            Self {
                store: ScopedStore::with_resolver("tool", resolver),
                scratch,
            }
        }
    }

    impl Drop for Sandbox {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.scratch).ok();
        }
    }

    fn set(namespace: &str, key: &str, value: &str, local: bool) -> Command {
        Command::Set {
            namespace: namespace.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            local,
        }
    }

    fn get(namespace: &str, key: &str) -> Command {
        Command::Get {
            namespace: namespace.to_string(),
            key: key.to_string(),
            global_only: false,
        }
    }

    #[test]
    fn test_set_then_get_reports_scope_and_value() {
        // Arrange
        let sb = Sandbox::new();
        execute(&sb.store, &set("profiles", "default", "region=us-east-1", false)).unwrap();

        // Act
        let output = execute(&sb.store, &get("profiles", "default")).unwrap();

        // Assert
        assert_eq!(
            output,
            Output::Value(Resolved {
                scope: Scope::Global,
                value: "region=us-east-1".to_string()
            })
        );
        assert_eq!(output.render(false).unwrap(), "region=us-east-1\n");
        assert_eq!(
            output.render(true).unwrap(),
            "{\"scope\":\"global\",\"value\":\"region=us-east-1\"}\n"
        );
    }

    #[test]
    fn test_get_global_only_ignores_local_value() {
        let sb = Sandbox::new();
        execute(&sb.store, &set("ns", "k", "near", true)).unwrap();
        execute(&sb.store, &set("ns", "k", "far", false)).unwrap();

        let output = execute(
            &sb.store,
            &Command::Get {
                namespace: "ns".to_string(),
                key: "k".to_string(),
                global_only: true,
            },
        )
        .unwrap();

        assert_eq!(output.render(false).unwrap(), "far\n");
    }

    #[test]
    fn test_get_missing_key_error_mentions_key() {
        let sb = Sandbox::new();

        let err = execute(&sb.store, &get("ns", "absent")).unwrap_err();

        assert!(err.to_string().contains("ns/absent"), "got: {err}");
    }

    #[test]
    fn test_list_renders_one_key_per_line() {
        let sb = Sandbox::new();
        for key in ["b", "a"] {
            execute(&sb.store, &set("ns", key, "x", false)).unwrap();
        }

        let output = execute(
            &sb.store,
            &Command::List {
                namespace: "ns".to_string(),
                local: false,
            },
        )
        .unwrap();

        assert_eq!(output.render(false).unwrap(), "a\nb\n");
        assert_eq!(output.render(true).unwrap(), "[\"a\",\"b\"]\n");
    }

    #[test]
    fn test_delete_prefers_local_then_global() {
        let sb = Sandbox::new();
        execute(&sb.store, &set("ns", "k", "near", true)).unwrap();
        execute(&sb.store, &set("ns", "k", "far", false)).unwrap();
        let delete = Command::Delete {
            namespace: "ns".to_string(),
            key: "k".to_string(),
            global_only: false,
        };

        let first = execute(&sb.store, &delete).unwrap();
        let second = execute(&sb.store, &delete).unwrap();

        assert_eq!(first, Output::Removed(Scope::Local));
        assert_eq!(second, Output::Removed(Scope::Global));
        assert!(execute(&sb.store, &delete).is_err());
    }

    #[test]
    fn test_path_points_into_dot_base() {
        let sb = Sandbox::new();

        let output = execute(
            &sb.store,
            &Command::Path {
                namespace: "ns".to_string(),
                key: "k".to_string(),
                local: true,
            },
        )
        .unwrap();

        assert_eq!(
            output,
            Output::Path(sb.scratch.join("cwd").join(".tool").join("ns").join("k"))
        );
    }

    #[test]
    fn test_export_renders_parseable_toml_and_skips_directories() {
        // Arrange
        let sb = Sandbox::new();
        execute(&sb.store, &set("ns", "name", "demo", false)).unwrap();
        execute(&sb.store, &set("ns", "quote", "say \"hi\"", false)).unwrap();
        let nested = sb.store.namespace_dir(Scope::Global, "ns").unwrap().join("sub");
        std::fs::create_dir_all(&nested).unwrap();

        // Act
        let output = execute(
            &sb.store,
            &Command::Export {
                namespace: "ns".to_string(),
                local: false,
            },
        )
        .unwrap();
        let text = output.render(false).unwrap();

        // Assert
        let parsed: BTreeMap<String, String> = toml::from_str(&text).expect("valid TOML");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["name"], "demo");
        assert_eq!(parsed["quote"], "say \"hi\"");
    }

    #[test]
    fn test_saved_renders_nothing_in_plain_mode() {
        assert_eq!(Output::Saved(Scope::Local).render(false).unwrap(), "");
        assert_eq!(
            Output::Saved(Scope::Local).render(true).unwrap(),
            "{\"scope\":\"local\"}\n"
        );
    }

    #[test]
    fn test_value_with_trailing_newline_is_not_doubled() {
        let output = Output::Value(Resolved {
            scope: Scope::Local,
            value: "line\n".to_string(),
        });
        assert_eq!(output.render(false).unwrap(), "line\n");
    }
}
