use clap::Parser;

// Import from organized modules
use gemcost::Result;
use gemcost::cli::{Cli, EstimateOutput};
use gemcost::pricing::estimate;
use gemcost::report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let model = cli.model_tier()?;
    let image_billing = cli.billing_mode()?;
    let usage = cli.usage_profile()?;
    let window = cli.window_selection()?.resolve(usage.avg_input_length);

    let breakdown = estimate(&usage, model, window, image_billing);

    if cli.json {
        let output = EstimateOutput {
            model,
            context_window: window,
            image_billing,
            usage,
            breakdown,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!(
            "{}",
            Report::new(&usage, model, window, image_billing, &breakdown).render()
        );
    }

    Ok(())
}
