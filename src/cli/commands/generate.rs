use anyhow::Result;

use super::super::{args::GenerateArgs, exit_status::ExitStatus, report};
use crate::{
    core::{CsvTranslationSource, GenerateContext, SourceExtractor},
    logging::ConsoleLogger,
};

pub fn generate(args: GenerateArgs) -> Result<ExitStatus> {
    let ctx = GenerateContext::new(&args)?;
    let logger = ConsoleLogger::new(ctx.verbose);

    let summary = ctx.generate(&SourceExtractor, &CsvTranslationSource, &logger)?;
    report::print_summary(&summary, ctx.verbose);

    if args.strict && !summary.missing.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
