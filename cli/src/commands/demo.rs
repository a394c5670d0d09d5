use scaffold_common::log::Log;
use scaffold_core::demo::full_demo;

/// Logs a full walkthrough of both libraries through `log`.
pub fn demo(log: &dyn Log) -> anyhow::Result<()> {
    log.info(format_args!(
        "{} v{} starting...",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));

    let report = full_demo()?;
    let (a, b) = report.operands;
    log.info(format_args!("Performing calculations with a={a}, b={b}"));

    for computation in &report.arithmetic {
        log.info(format_args!(
            "{}: {} = {}",
            computation.label, computation.expression, computation.value
        ));
    }

    let text = &report.text;
    log.info(format_args!("Original string: '{}'", text.original));
    log.info(format_args!("Trimmed string: '{}'", text.trimmed));
    log.info(format_args!("Uppercase string: '{}'", text.upper));
    log.info(format_args!("Lowercase string: '{}'", text.lower));

    log.info(format_args!("Split '{}' into {} parts:", text.csv, text.parts.len()));
    for (idx, part) in text.parts.iter().enumerate() {
        log.info(format_args!("  [{idx}]: '{part}'"));
    }

    log.debug(format_args!("Joining {} words with a space", text.words.len()));
    log.info(format_args!("Joined words: '{}'", text.joined));

    log.info(format_args!("Application completed successfully"));
    Ok(())
}
