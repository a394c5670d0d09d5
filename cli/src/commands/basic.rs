use scaffold_common::log::Log;
use scaffold_core::demo::{BASIC_OPERANDS, basic_arithmetic};

pub fn basic(log: &dyn Log) -> anyhow::Result<()> {
    log.info(format_args!("Starting basic calculator example"));

    let (a, b) = BASIC_OPERANDS;
    for computation in basic_arithmetic(a, b)? {
        log.info(format_args!(
            "Computing {} = {}",
            computation.expression, computation.value
        ));
    }

    log.info(format_args!("Example completed successfully!"));
    Ok(())
}
