use nsmessaging_codec::{Codec, CodecConfig, CodecError};
use nsmessaging_schema::DynMessage;
use serde::Serialize;

use crate::cmd::CheckArgs;
use crate::exit::{CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize, Debug)]
struct CheckOutput {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields_set: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let text = args.input.read()?;
    let codec = Codec::with_config(CodecConfig {
        strict_mode: args.input.strict,
        ..Default::default()
    });
    let out = check(&codec, &text);
    print_check(&out, format);
    Ok(if out.valid { SUCCESS } else { DATA_INVALID })
}

fn check(codec: &Codec, text: &str) -> CheckOutput {
    match codec.decode_dyn(text) {
        Ok(message) => valid(&message),
        Err(err) => invalid(&err),
    }
}

fn valid(message: &DynMessage) -> CheckOutput {
    let descriptor = message.message_type.descriptor();
    let fields_set = message.data.as_deref().map(|data| {
        descriptor
            .fields
            .iter()
            .filter_map(|field| data.field(field.name))
            .filter(|field| field.value().is_present())
            .count()
    });
    CheckOutput {
        valid: true,
        message_type: Some(message.message_type.to_string()),
        version: Some(message.version.clone()),
        record: Some(descriptor.name),
        fields_set,
        error: None,
        path: None,
    }
}

fn invalid(err: &CodecError) -> CheckOutput {
    tracing::debug!(error = %err, "message rejected");
    CheckOutput {
        valid: false,
        message_type: None,
        version: None,
        record: None,
        fields_set: None,
        error: Some(err.to_string()),
        path: err.path().map(ToString::to_string),
    }
}

fn print_check(out: &CheckOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let rows = [
                ("valid", Some(out.valid.to_string())),
                ("message type", out.message_type.clone()),
                ("version", out.version.clone()),
                ("record", out.record.map(str::to_string)),
                ("fields set", out.fields_set.map(|n| n.to_string())),
                ("error", out.error.clone()),
                ("path", out.path.clone()),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| vec![key.to_string(), value]))
            .collect();
            print_table(&["KEY", "VALUE"], rows);
        }
        OutputFormat::Pretty => match (&out.message_type, &out.error) {
            (Some(message_type), _) => println!(
                "ok: {message_type} v{} ({} fields set)",
                out.version.as_deref().unwrap_or_default(),
                out.fields_set.unwrap_or_default()
            ),
            (None, Some(error)) => println!("invalid: {error}"),
            (None, None) => println!("invalid"),
        },
        OutputFormat::Raw => match &out.message_type {
            Some(message_type) => println!("{message_type}"),
            None => println!("{}", out.error.as_deref().unwrap_or_default()),
        },
    }
}
