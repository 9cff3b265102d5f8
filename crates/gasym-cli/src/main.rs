use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use gasym_clifford::explorer::{render_survey, survey};
use gasym_clifford::{
    explore, AlgebraFamily, ExplorerConfig, InputShape, Layout, OutputFormat, ProductKind,
};

#[derive(Debug, Parser)]
#[command(
    name = "gasym",
    about = "Symbolic geometric algebra explorer",
    long_about = "Prints symbolic products of general multivectors in projective and\nconformal algebras, one basis-blade component per line, and derives the\nclosed-form homography of the unit square.",
    version,
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Apply a product to two symbolic operands
    Product {
        /// Algebra family, see `gasym info`
        algebra: AlgebraFamily,
        /// Product name, see `gasym info`
        product: ProductKind,
        /// Shape of the first operand
        input_a: InputShape,
        /// Shape of the second operand
        input_b: InputShape,
        /// Result layout
        #[arg(long, default_value = "components")]
        layout: Layout,
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
        /// Prefix for the first operand's unknowns
        #[arg(long, default_value = "A")]
        label_a: String,
        /// Prefix for the second operand's unknowns
        #[arg(long, default_value = "B")]
        label_b: String,
    },
    /// Apply a product to every even/odd operand pairing
    Survey {
        /// Algebra family, see `gasym info`
        algebra: AlgebraFamily,
        /// Product name, see `gasym info`
        product: ProductKind,
        /// Result layout
        #[arg(long, default_value = "components")]
        layout: Layout,
    },
    /// Derive the homography mapping the unit square onto four points
    Homography {
        /// Also evaluate the solution with the unit square as destination
        #[arg(long)]
        check: bool,
    },
    /// List algebras, products and input shapes
    Info,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Product { algebra, product, input_a, input_b, layout, format, label_a, label_b } => {
            let config = ExplorerConfig { layout, format, label_a, label_b };
            cmd_product(algebra, product, input_a, input_b, &config)
        }
        Commands::Survey { algebra, product, layout } => {
            let config = ExplorerConfig { layout, ..ExplorerConfig::default() };
            cmd_survey(algebra, product, &config)
        }
        Commands::Homography { check } => cmd_homography(check),
        Commands::Info => cmd_info(),
    }
}

fn cmd_product(
    family: AlgebraFamily,
    product: ProductKind,
    shape_a: InputShape,
    shape_b: InputShape,
    config: &ExplorerConfig,
) -> anyhow::Result<()> {
    let report = explore(family, product, shape_a, shape_b, config)?;
    tracing::debug!("{} result: {} terms, parity {}", product, report.terms.len(), report.parity);
    println!("{}", report.render(config.format)?);
    Ok(())
}

fn cmd_survey(family: AlgebraFamily, product: ProductKind, config: &ExplorerConfig) -> anyhow::Result<()> {
    let sections = survey(family, product, config)?;
    println!("{} ========================", product.label());
    println!("{}", render_survey(&sections, config.format)?);
    Ok(())
}

fn cmd_homography(check: bool) -> anyhow::Result<()> {
    let derivation = gasym_symbolic::homography::derive()?;
    tracing::debug!("denominator det(E, F, G) has {} terms", derivation.denominator.len());
    println!("{}", derivation);

    let solved = derivation.solved()?;
    println!("\nSolved H:\n{}", solved);

    if check {
        let unit = solved.at_destinations([(0, 0), (1, 0), (1, 1), (0, 1)])?;
        println!("\nH with the unit square as destination:\n{}", unit);
    }
    Ok(())
}

fn cmd_info() -> anyhow::Result<()> {
    println!("gasym v{}\n", env!("CARGO_PKG_VERSION"));

    println!("Algebras");
    for family in AlgebraFamily::ALL {
        let (p, q, r) = family.signature();
        let letters: String = family.generator_letters().iter().collect();
        println!("  {:<6} Cl({},{},{})  suffixes: {}", family, p, q, r, letters);
    }

    println!("\nProducts");
    for product in ProductKind::ALL {
        println!("  {:<18} {}", product, product.label());
    }

    println!("\nInput shapes");
    let shapes: Vec<&str> = InputShape::ALL.iter().map(|s| s.name()).collect();
    println!("  {}", shapes.join(", "));

    let layouts: Vec<&str> = Layout::ALL.iter().map(|l| l.name()).collect();
    let formats: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
    println!("\nLayouts: {}\nFormats: {}", layouts.join(", "), formats.join(", "));

    println!("\nDefault config");
    println!("{}", serde_json::to_string_pretty(&ExplorerConfig::default())?);
    Ok(())
}
