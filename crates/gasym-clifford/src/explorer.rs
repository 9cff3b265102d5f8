//! One-shot product exploration: build two symbolic operands, combine them,
//! and report the result componentwise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::display::{self, Layout, Term};
use crate::error::CliffordError;
use crate::multivector::Parity;
use crate::product_kind::ProductKind;
use crate::registry::{choices, AlgebraFamily, InputShape};
use crate::Result;

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = CliffordError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| CliffordError::UnknownFormat {
                got: s.to_string(),
                expected: choices(Self::ALL.iter().map(|f| f.name())),
            })
    }
}

/// Explorer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub layout: Layout,
    pub format: OutputFormat,
    /// Prefix of the first operand's unknowns.
    pub label_a: String,
    /// Prefix of the second operand's unknowns.
    pub label_b: String,
}

impl ExplorerConfig {
    /// One line per blade, plain text.
    pub fn components() -> Self {
        Self {
            layout: Layout::Components,
            format: OutputFormat::Text,
            label_a: "A".to_string(),
            label_b: "B".to_string(),
        }
    }

    /// Terms grouped by grade.
    pub fn grades() -> Self {
        Self { layout: Layout::Grades, ..Self::components() }
    }

    /// Machine-readable output.
    pub fn json() -> Self {
        Self { format: OutputFormat::Json, ..Self::components() }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::components()
    }
}

/// Outcome of one product application.
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub algebra: String,
    pub product: String,
    pub label: String,
    pub a: String,
    pub b: String,
    pub terms: Vec<Term>,
    pub parity: Parity,
    #[serde(skip)]
    layout: Layout,
}

impl ProductReport {
    pub fn render_text(&self) -> String {
        let mut out = vec![
            format!("{} ========================", self.label),
            format!("A: {}", self.a),
            format!("B: {}", self.b),
        ];
        let body = display::render(&self.terms, self.layout);
        if !body.is_empty() {
            out.push(body);
        }
        out.join("\n")
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }
}

/// Build the algebra and operands, apply `product`, and collect the result.
pub fn explore(
    family: AlgebraFamily,
    product: ProductKind,
    shape_a: InputShape,
    shape_b: InputShape,
    config: &ExplorerConfig,
) -> Result<ProductReport> {
    let alg = family.algebra();
    let a = shape_a.build(family, &alg, &config.label_a);
    let b = shape_b.build(family, &alg, &config.label_b);
    tracing::debug!("explore: {} {} {} {}", family, product, shape_a, shape_b);

    let result = product.apply(&alg, &a, &b)?;
    Ok(ProductReport {
        algebra: family.name().to_string(),
        product: product.name().to_string(),
        label: product.label().to_string(),
        a: display::format_sum(&alg, &a)?,
        b: display::format_sum(&alg, &b)?,
        terms: display::components(&alg, &result)?,
        parity: result.parity(&alg),
        layout: config.layout,
    })
}

/// One (shape, shape) combination of a survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySection {
    pub a: Parity,
    pub b: Parity,
    pub report: ProductReport,
}

impl SurveySection {
    /// `Even, Odd = Odd`
    pub fn heading(&self) -> String {
        format!("{}, {} = {}", self.a, self.b, self.report.parity)
    }
}

/// Run `product` over every pairing of even and odd operands.
///
/// The (odd, even) section is the (even, odd) one in opposite order: the
/// odd `B` operand times the even `A` operand, so the two mixed sections
/// share their unknowns.
pub fn survey(family: AlgebraFamily, product: ProductKind, config: &ExplorerConfig) -> Result<Vec<SurveySection>> {
    let reversed = ExplorerConfig {
        label_a: config.label_b.clone(),
        label_b: config.label_a.clone(),
        ..config.clone()
    };
    let pairs = [
        (Parity::Even, Parity::Even, config),
        (Parity::Even, Parity::Odd, config),
        (Parity::Odd, Parity::Even, &reversed),
        (Parity::Odd, Parity::Odd, config),
    ];
    pairs
        .into_iter()
        .map(|(a, b, labels)| {
            let report = explore(family, product, shape_of(a), shape_of(b), labels)?;
            Ok(SurveySection { a, b, report })
        })
        .collect()
}

fn shape_of(parity: Parity) -> InputShape {
    match parity {
        Parity::Odd => InputShape::Odd,
        _ => InputShape::Even,
    }
}

pub fn render_survey(sections: &[SurveySection], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
        OutputFormat::Text => Ok(sections
            .iter()
            .map(|s| {
                let body = display::render(&s.report.terms, s.report.layout);
                if body.is_empty() {
                    s.heading()
                } else {
                    format!("{}\n{}", s.heading(), body)
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}
