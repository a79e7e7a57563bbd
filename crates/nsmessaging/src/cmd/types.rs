use nsmessaging_schema::MessageType;
use serde::Serialize;

use crate::cmd::TypesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize, Debug)]
struct TypeRow {
    message_type: &'static str,
    record: &'static str,
    fields: usize,
}

pub fn run(_args: TypesArgs, format: OutputFormat) -> CliResult<i32> {
    print_types(&rows(), format);
    Ok(SUCCESS)
}

fn rows() -> Vec<TypeRow> {
    MessageType::ALL
        .iter()
        .map(|message_type| {
            let descriptor = message_type.descriptor();
            TypeRow {
                message_type: message_type.as_str(),
                record: descriptor.name,
                fields: descriptor.fields.len(),
            }
        })
        .collect()
}

fn print_types(rows: &[TypeRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(rows),
        OutputFormat::Table => print_table(
            &["MESSAGE TYPE", "RECORD", "FIELDS"],
            rows.iter()
                .map(|row| {
                    vec![
                        row.message_type.to_string(),
                        row.record.to_string(),
                        row.fields.to_string(),
                    ]
                })
                .collect(),
        ),
        OutputFormat::Pretty => {
            for row in rows {
                println!("{:<28} {:<32} {} fields", row.message_type, row.record, row.fields);
            }
        }
        OutputFormat::Raw => {
            for row in rows {
                println!("{}", row.message_type);
            }
        }
    }
}
