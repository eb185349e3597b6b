//! Subcommand execution against a loaded registry

use crate::cli::{to_format_args, Commands};
use crate::error::CliResult;
use tracing::debug;
use ytrans_i18n::{rewrap, GroupRegistry, Mapping, Value};

/// Run `command` and return the value to print
pub fn execute(command: &Commands, registry: &GroupRegistry) -> CliResult<Value> {
    match command {
        Commands::Groups => Ok(strings(registry.groups())),

        Commands::Languages { group } => Ok(strings(registry.get(group)?.languages())),

        Commands::Get {
            group,
            path,
            language,
            default,
            args,
        } => {
            debug!(group, path, language, "Looking up translation");
            let table = registry.get(group)?;
            let format = to_format_args(args);
            let value = match default {
                Some(default) => table.get_or(
                    path,
                    language,
                    Value::String(default.clone()),
                    format.as_ref(),
                )?,
                None => table
                    .get(path, language, format.as_ref())?
                    .unwrap_or(Value::Null),
            };
            Ok(value)
        }

        Commands::GetAll {
            group,
            path,
            args,
            by_key,
        } => {
            debug!(group, path, "Looking up translation in every language");
            let table = registry.get(group)?;
            let format = to_format_args(args);
            let by_language: Mapping = table
                .get_all(path, format.as_ref())?
                .into_iter()
                .map(|(language, value)| (Value::String(language), value.unwrap_or(Value::Null)))
                .collect();

            Ok(Value::Mapping(if *by_key {
                rewrap(&by_language)
            } else {
                by_language
            }))
        }
    }
}

fn strings(items: Vec<&str>) -> Value {
    Value::Sequence(items.into_iter().map(|item| Value::String(item.to_string())).collect())
}
