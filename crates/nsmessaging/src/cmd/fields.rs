use nsmessaging_schema::{descriptor_for, MessageDescriptor};
use serde::Serialize;

use crate::cmd::FieldsArgs;
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize, Debug)]
struct FieldRow {
    name: &'static str,
    proto_name: &'static str,
    kind: String,
    cardinality: &'static str,
}

#[derive(Serialize, Debug)]
struct FieldsOutput {
    record: &'static str,
    fields: Vec<FieldRow>,
}

pub fn run(args: FieldsArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor =
        descriptor_for(&args.type_name).map_err(|err| schema_error("fields", err))?;
    print_fields(&describe(descriptor), format);
    Ok(SUCCESS)
}

fn describe(descriptor: &'static MessageDescriptor) -> FieldsOutput {
    FieldsOutput {
        record: descriptor.name,
        fields: descriptor
            .fields
            .iter()
            .map(|field| FieldRow {
                name: field.name,
                proto_name: field.proto_name,
                kind: field.kind.to_string(),
                cardinality: field.cardinality.as_str(),
            })
            .collect(),
    }
}

fn print_fields(out: &FieldsOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let rows = out
                .fields
                .iter()
                .map(|row| {
                    vec![
                        row.name.to_string(),
                        row.kind.clone(),
                        row.cardinality.to_string(),
                    ]
                })
                .collect();
            print_table(&["FIELD", "KIND", "CARDINALITY"], rows);
        }
        OutputFormat::Pretty => {
            println!("{}:", out.record);
            for row in &out.fields {
                println!("  {:<28} {:<24} {}", row.name, row.kind, row.cardinality);
            }
        }
        OutputFormat::Raw => {
            for row in &out.fields {
                println!("{}", row.name);
            }
        }
    }
}
