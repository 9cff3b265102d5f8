//! Componentwise rendering of multivectors.

use std::fmt;
use std::str::FromStr;

use gasym_symbolic::RatFunc;
use serde::{Deserialize, Serialize, Serializer};

use crate::algebra::CliffordAlgebra;
use crate::error::CliffordError;
use crate::multivector::Multivector;
use crate::registry::choices;
use crate::Result;

/// How result terms are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One line per non-zero blade.
    #[default]
    Components,
    /// Terms grouped under a `grade k:` header.
    Grades,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Components, Layout::Grades];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Components => "components",
            Layout::Grades => "grades",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Layout {
    type Err = CliffordError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| CliffordError::UnknownLayout {
                got: s.to_string(),
                expected: choices(Self::ALL.iter().map(|l| l.name())),
            })
    }
}

/// One non-zero component of a multivector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub blade: String,
    pub grade: usize,
    #[serde(serialize_with = "display_str")]
    pub coefficient: RatFunc,
}

fn display_str<S: Serializer>(value: &RatFunc, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Term {
    /// `(coef) e01`, or `(coef)` for the scalar.
    pub fn line(&self) -> String {
        if self.grade == 0 {
            format!("({})", self.coefficient)
        } else {
            format!("({}) {}", self.coefficient, self.blade)
        }
    }
}

/// Non-zero components in the algebra's blade order.
pub fn components(alg: &CliffordAlgebra, mv: &Multivector) -> Result<Vec<Term>> {
    mv.nonzero_blades(alg)
        .into_iter()
        .map(|b| {
            Ok(Term {
                blade: alg.blade_name(b),
                grade: alg.grade(b),
                coefficient: mv.component(b)?,
            })
        })
        .collect()
}

pub fn render_terms(terms: &[Term]) -> String {
    terms.iter().map(Term::line).collect::<Vec<_>>().join("\n")
}

pub fn render_grades(terms: &[Term]) -> String {
    let mut out = Vec::new();
    let mut current = None;
    for term in terms {
        if current != Some(term.grade) {
            out.push(format!("grade {}:", term.grade));
            current = Some(term.grade);
        }
        out.push(term.line());
    }
    out.join("\n")
}

pub fn render(terms: &[Term], layout: Layout) -> String {
    match layout {
        Layout::Components => render_terms(terms),
        Layout::Grades => render_grades(terms),
    }
}

/// Inline sum such as `As + Aox e01`, or `0`.
pub fn format_sum(alg: &CliffordAlgebra, mv: &Multivector) -> Result<String> {
    let terms = components(alg, mv)?;
    if terms.is_empty() {
        return Ok("0".to_string());
    }
    let parts: Vec<String> = terms
        .iter()
        .map(|t| {
            let coef = t.coefficient.to_string();
            let simple = t.coefficient.as_poly().is_some_and(|p| p.len() == 1);
            let coef = if simple { coef } else { format!("({})", coef) };
            if t.grade == 0 {
                coef
            } else {
                format!("{} {}", coef, t.blade)
            }
        })
        .collect();
    Ok(parts.join(" + "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AlgebraFamily;
    use gasym_symbolic::{Poly, Symbol};

    fn sym(name: &str) -> Poly {
        Poly::symbol(&Symbol::new(name))
    }

    #[test]
    fn test_components_skip_zeros() {
        let alg = CliffordAlgebra::new(2, 0, 1);
        let mv = Multivector::from_terms(&alg, [(0b110, sym("a")), (0, sym("b")), (0b001, Poly::zero())]);
        let terms = components(&alg, &mv).unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].blade, "1");
        assert_eq!(terms[1].blade, "e12");
        assert_eq!(render_terms(&terms), "(b)\n(a) e12");
    }

    #[test]
    fn test_render_grades() {
        let family = AlgebraFamily::Pga2;
        let alg = family.algebra();
        let even = family.even(&alg, "A");
        let text = render_grades(&components(&alg, &even).unwrap());
        assert_eq!(text, "grade 0:\n(As)\ngrade 2:\n(Aox) e01\n(Aoy) e02\n(Axy) e12");
    }

    #[test]
    fn test_format_sum() {
        let family = AlgebraFamily::Pga1;
        let alg = family.algebra();
        assert_eq!(format_sum(&alg, &family.even(&alg, "A")).unwrap(), "As + Aox e01");
        assert_eq!(format_sum(&alg, &Multivector::zero(&alg)).unwrap(), "0");

        let mixed = Multivector::from_terms(&alg, [(0b01, &sym("a") + &sym("b"))]);
        assert_eq!(format_sum(&alg, &mixed).unwrap(), "(a + b) e0");
    }

    #[test]
    fn test_term_line() {
        // blade follows the parenthesised coefficient after a space, no `*`
        let alg = CliffordAlgebra::new(2, 0, 0);
        let mv = Multivector::from_terms(&alg, [(0, sym("s")), (0b01, &sym("a") - &sym("b"))]);
        let lines: Vec<String> = components(&alg, &mv).unwrap().iter().map(Term::line).collect();
        assert_eq!(lines, vec!["(s)", "(a - b) e1"]);
    }

    #[test]
    fn test_layout_names() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>().unwrap(), layout);
        }
        let err = "table".parse::<Layout>().unwrap_err();
        assert!(matches!(err, CliffordError::UnknownLayout { .. }));
        assert!(err.to_string().contains("components, grades"));
    }

    #[test]
    fn test_term_json() {
        let alg = CliffordAlgebra::new(1, 0, 1);
        let mv = Multivector::from_terms(&alg, [(0b11, &sym("x") * &sym("y"))]);
        let json = serde_json::to_string(&components(&alg, &mv).unwrap()).unwrap();
        assert_eq!(json, r#"[{"blade":"e01","grade":2,"coefficient":"x*y"}]"#);
    }
}
