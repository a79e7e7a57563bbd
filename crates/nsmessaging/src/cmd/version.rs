use nsmessaging_codec::wire;
use nsmessaging_schema::MessageType;
use serde::Serialize;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

/// Build provenance plus the wire rules this binary encodes with.
#[derive(Serialize, Debug)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    target: &'static str,
    rustc: &'static str,
    git_hash: &'static str,
    message_types: usize,
    wide_integers: &'static str,
    binary: &'static str,
    non_finite_floats: [&'static str; 3],
    json_features: &'static [&'static str],
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            name: "nsmessaging",
            version: env!("CARGO_PKG_VERSION"),
            target: option_env!("NSMESSAGING_BUILD_TARGET").unwrap_or("unknown"),
            rustc: option_env!("RUSTC_VERSION").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            message_types: MessageType::ALL.len(),
            wide_integers: wire::WIDE_INTEGERS,
            binary: wire::BINARY,
            non_finite_floats: [wire::NAN, wire::INFINITY, wire::NEG_INFINITY],
            json_features: wire::JSON_FEATURES,
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.to_string()),
            ("version", self.version.to_string()),
            ("target", self.target.to_string()),
            ("rustc", self.rustc.to_string()),
            ("git_hash", self.git_hash.to_string()),
            ("message_types", self.message_types.to_string()),
            ("wide_integers", self.wide_integers.to_string()),
            ("binary", self.binary.to_string()),
            ("non_finite_floats", self.non_finite_floats.join(", ")),
            ("json_features", self.json_features.join(", ")),
        ]
    }
}

pub fn run(args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    let info = VersionInfo::current();
    if !args.extended {
        println!("{} {}", info.name, info.version);
        return Ok(SUCCESS);
    }

    match format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Table => print_table(
            &["KEY", "VALUE"],
            info.pairs()
                .into_iter()
                .map(|(key, value)| vec![key.to_string(), value])
                .collect(),
        ),
        OutputFormat::Pretty | OutputFormat::Raw => {
            for (key, value) in info.pairs() {
                println!("{key}: {value}");
            }
        }
    }

    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_wire_rules() {
        let info = VersionInfo::current();
        assert_eq!(info.message_types, 20);
        assert_eq!(info.wide_integers, "quoted-decimal");
        assert!(info.json_features.contains(&"float_roundtrip"));

        let pairs = info.pairs();
        assert_eq!(pairs[0], ("name", "nsmessaging".to_string()));
        assert!(pairs
            .iter()
            .any(|(key, value)| *key == "non_finite_floats" && value == "NaN, Infinity, -Infinity"));
    }
}
