// ABOUTME: Hydrates configured CLI commands into command and flag descriptors
// ABOUTME: Resolves each subcommand's schema field and derives flags from its arguments

use log::{debug, warn};

use crate::config::{CommandConfig, PackageConfig};
use crate::constants::{defaults, native};
use crate::error::GenerateError;
use crate::lang::resolve::{resolve_subcommand, Resolution};
use crate::lang::unwrap::base_type_name;
use crate::lang::{Command, CommandFlag, InputObject};
use crate::naming;
use crate::schema::{Field, Schema};

/// Values interpolated into a synthesized example invocation
#[derive(Debug, Clone)]
pub struct CommandExampleData<'a> {
    pub cli_name: &'a str,
    pub package_name: &'a str,
    pub command: &'a str,
    pub subcommand: &'a str,
    pub flags: &'a [CommandFlag],
}

/// One flag per schema argument.
///
/// Input objects collapse into a single `<Name>Input` variable holding
/// their serialized form; other arguments get `<Name><argName>`.
pub fn hydrate_flags(
    args: &[Field],
    config: &CommandConfig,
    package: &PackageConfig,
) -> Vec<CommandFlag> {
    args.iter()
        .map(|arg| {
            let is_input_type = arg.type_ref.is_input_object();
            let variable_name = if is_input_type {
                format!("{}Input", config.name)
            } else {
                format!("{}{}", config.name, arg.name)
            };

            let type_name = base_type_name(&arg.type_ref, package);
            let flag_method = native::flag_method(&type_name);
            let variable_type = match flag_method {
                Some(_) => type_name.clone(),
                None => native::STRING.to_string(),
            };

            CommandFlag {
                name: arg.name.clone(),
                flag_method_name: flag_method
                    .unwrap_or(native::DEFAULT_FLAG_METHOD)
                    .to_string(),
                default_value: String::new(),
                description: arg.description().to_string(),
                variable_name,
                variable_type,
                client_type: format!("{}.{}", config.client_package_name, type_name),
                required: arg.type_ref.is_required(),
                is_input_type,
                type_name,
            }
        })
        .collect()
}

/// Example invocation: program, package, command and subcommand followed by
/// one `--<flag>` per flag in order
pub fn command_example(data: &CommandExampleData<'_>) -> String {
    let mut example = defaults::COMMAND_EXAMPLE_TEMPLATE
        .replace("{cli}", data.cli_name)
        .replace("{package}", data.package_name)
        .replace("{command}", data.command)
        .replace("{subcommand}", data.subcommand);

    for flag in data.flags {
        example.push_str(" --");
        example.push_str(&flag.name);
    }

    example
}

fn hydrate_subcommand(
    field: &Field,
    parent: &CommandConfig,
    config: &CommandConfig,
    package: &PackageConfig,
) -> Command {
    let mut config = config.clone();
    if config.client_package_name.is_empty() {
        config.client_package_name = parent.client_package_name.clone();
    }

    let flags = hydrate_flags(&field.args, &config, package);
    let input_objects = flags
        .iter()
        .filter(|f| f.is_input_type)
        .map(|f| InputObject {
            name: f.variable_name.clone(),
            type_expr: f.client_type.clone(),
        })
        .collect();

    let example = if config.example.is_empty() {
        command_example(&CommandExampleData {
            cli_name: package.cli_name(),
            package_name: &package.name,
            command: &parent.name,
            subcommand: &config.name,
            flags: &flags,
        })
    } else {
        config.example.clone()
    };

    let short_description = if config.short_description.is_empty() {
        field.description().lines().next().unwrap_or_default().to_string()
    } else {
        config.short_description.clone()
    };
    let long_description = if config.long_description.is_empty() {
        field.description().to_string()
    } else {
        config.long_description.clone()
    };

    Command {
        cmd_variable_name: format!(
            "{}{}",
            defaults::SUBCOMMAND_VARIABLE_PREFIX,
            naming::export_name(&config.name)
        ),
        short_description,
        long_description,
        example,
        graphql_path: config.path.clone(),
        client_method: config
            .client_method
            .clone()
            .unwrap_or_else(|| field.exported_name()),
        client_method_args: flags.iter().map(|f| f.variable_name.clone()).collect(),
        input_objects,
        flags,
        subcommands: Vec::new(),
        name: config.name,
    }
}

/// Hydrate one command and its subcommands.
///
/// A command without subcommands is warned about and yields `None`; a
/// subcommand that resolves to no schema field aborts generation.
pub fn hydrate_command(
    schema: &Schema,
    config: &CommandConfig,
    package: &PackageConfig,
) -> Result<Option<Command>, GenerateError> {
    if config.subcommands.is_empty() {
        warn!(
            "command {} in package {} has no subcommands, skipping",
            config.name, package.name
        );
        return Ok(None);
    }

    let mut subcommands = Vec::with_capacity(config.subcommands.len());
    for sub in &config.subcommands {
        let field = match resolve_subcommand(schema, sub) {
            Resolution::Mutation(field) => {
                debug!("subcommand {} resolved to mutation", sub.name);
                field
            }
            Resolution::Query(field) => {
                debug!("subcommand {} resolved to query {}", sub.name, sub.path.join("."));
                field
            }
            Resolution::Unresolved(reason) => {
                return Err(GenerateError::UnresolvedSubcommand {
                    command: config.name.clone(),
                    subcommand: sub.name.clone(),
                    reason,
                })
            }
        };
        subcommands.push(hydrate_subcommand(field, config, sub, package));
    }

    Ok(Some(Command {
        name: config.name.clone(),
        cmd_variable_name: defaults::COMMAND_VARIABLE.to_string(),
        short_description: config.short_description.clone(),
        long_description: config.long_description.clone(),
        example: config.example.clone(),
        graphql_path: config.path.clone(),
        subcommands,
        ..Default::default()
    }))
}

/// Commands for every command configured on the package, in configuration order
pub fn hydrate_commands(
    schema: &Schema,
    package: &PackageConfig,
) -> Result<Vec<Command>, GenerateError> {
    let mut commands = Vec::with_capacity(package.commands.len());
    for config in &package.commands {
        if let Some(command) = hydrate_command(schema, config, package)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
