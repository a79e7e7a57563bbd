use nsmessaging_codec::{Codec, CodecConfig};

use crate::cmd::CanonArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};

pub fn run(args: CanonArgs) -> CliResult<i32> {
    let text = args.input.read()?;
    println!("{}", canonicalize(&text, args.input.strict, args.pretty)?);
    Ok(SUCCESS)
}

fn canonicalize(text: &str, strict: bool, pretty: bool) -> CliResult<String> {
    let codec = Codec::with_config(CodecConfig {
        strict_mode: strict,
        pretty,
    });
    let message = codec
        .decode_dyn(text)
        .map_err(|err| codec_error("decode failed", err))?;
    tracing::debug!(
        message_type = %message.message_type,
        version = %message.version,
        "decoded message"
    );
    Ok(codec.encode_dyn(&message))
}
