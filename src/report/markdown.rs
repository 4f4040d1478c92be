use std::fmt::Write;

use crate::analysis::{CategorySummary, ComparisonResult, DescriptiveReport, Transform};
use crate::config::ALPHA;
use crate::error::DashboardError;
use crate::plot::embed_data_uri;
use crate::stats::VarianceAssumption;

/// Descriptive narrative: summary table, embedded boxplot, interval bullets.
///
/// A plot that was not saved or cannot be read becomes an inline error
/// string; the rest of the narrative is still produced.
pub fn render_descriptive(report: &DescriptiveReport) -> String {
    let variable = report.variable.label();
    let mut out = String::new();

    out.push_str("### 📊 Sumário descritivo\n");
    out.push_str(&summary_table(variable, &report.summaries));
    out.push_str("\n---\n\n### 📈 Visualização gráfica\n");
    let embedded = report
        .plot
        .as_ref()
        .map_err(Clone::clone)
        .and_then(|plot| embed_data_uri(&plot.path).map_err(|e| e.to_string()));
    match embedded {
        Ok(uri) => {
            let _ = writeln!(out, "![Salario por {}]({})", variable, uri);
        }
        Err(e) => {
            let _ = writeln!(out, "Erro ao carregar imagem: {}", e);
        }
    }
    out.push_str("\n---\n\n### 📏 Intervalo de confiança para a média (95% de confiança)\n");
    for s in &report.summaries {
        let _ = write!(
            out,
            "- {}:\n  - **IC Inferior:** {:.2}\n  - **IC Superior:** {:.2}\n\n",
            s.category, s.ci.lower, s.ci.upper
        );
    }
    out
}

fn summary_table(variable: &str, summaries: &[CategorySummary]) -> String {
    let mut table = format!(
        "| {} | count | mean | std | min | 25% | 50% | 75% | max |\n\
         |:--|--:|--:|--:|--:|--:|--:|--:|--:|\n",
        variable
    );
    for s in summaries {
        let _ = writeln!(
            table,
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            s.category,
            s.n,
            number(s.mean),
            number(s.std),
            number(s.min),
            number(s.q1),
            number(s.median),
            number(s.q3),
            number(s.max)
        );
    }
    table
}

fn number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Hypothesis-test narrative: normality and transform paragraphs, the
/// hypotheses, and the verdict with the p-value rounded to 6 decimals.
pub fn render_comparison(result: &ComparisonResult) -> String {
    let mut out = String::new();

    match result.transform {
        Transform::None => out.push_str("Os dados seguem uma distribuição normal.\n"),
        transform => {
            out.push_str(
                "Os dados das categorias não seguem uma distribuição normal. \
                 Serão aplicadas transformações para realizar o teste de hipóteses.\n",
            );
            if let Transform::BoxCox { lambda_a, lambda_b } = transform {
                let _ = writeln!(
                    out,
                    "Os dados são assimétricos. Será aplicada a transformação Box-Cox \
                     (λ<sub>{}</sub> = {:.4}, λ<sub>{}</sub> = {:.4}).",
                    result.category_a, lambda_a, result.category_b, lambda_b
                );
            } else {
                out.push_str(
                    "Como os grupos são assimétricos à direita, para se aproximar de uma normal, \
                     utilizaremos transformação logarítmica.\n",
                );
            }
        }
    }

    let test_name = match result.variance {
        VarianceAssumption::Equal => "t de Student",
        VarianceAssumption::Unequal => "t de Welch",
    };
    let _ = writeln!(
        out,
        "\nTeste de Bartlett para homogeneidade das variâncias: p-value ({:.6}). Foi utilizado o teste {}.",
        result.bartlett.pvalue, test_name
    );

    let (a, b) = (&result.category_a, &result.category_b);
    let _ = writeln!(out, "\n- H<sub>0</sub>: μ<sub>{}</sub>   =   μ<sub>{}</sub>", a, b);
    let _ = writeln!(out, "\n- H<sub>1</sub>: μ<sub>{}</sub>   ≠   μ<sub>{}</sub>", a, b);
    let _ = write!(
        out,
        "\nComo p-value ({:.6}) é {} que {}, há evidências estatísticas suficientes para \
         afirmar que as médias das categorias são {}.",
        result.ttest.pvalue,
        result.verdict.relation(),
        ALPHA,
        result.verdict.conclusion()
    );
    out
}

/// Single-paragraph message for an analysis that could not complete.
pub fn render_error(err: &DashboardError) -> String {
    match err {
        DashboardError::EmptySample { category, .. } => format!(
            "A categoria {} não possui salários informados. \
             Não é possível realizar o teste de hipóteses.",
            category
        ),
        DashboardError::InsufficientData {
            test,
            required,
            got,
            category,
        } => format!(
            "A categoria {} possui apenas {} salário(s) informado(s); \
             o teste {} exige pelo menos {} observações.",
            category, got, test, required
        ),
        DashboardError::DataAccess { .. } => format!("Erro ao acessar os dados: {}", err),
        other => format!("Não foi possível concluir a análise: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{TestOutcome, Verdict};
    use crate::dataset::Variable;
    use crate::plot::ArtifactRef;
    use crate::stats::ConfidenceInterval;

    fn comparison(transform: Transform, pvalue: f64) -> ComparisonResult {
        let outcome = |p| TestOutcome {
            statistic: 0.9,
            pvalue: p,
        };
        ComparisonResult {
            variable: Variable::Gender,
            category_a: "Feminino".to_string(),
            category_b: "Masculino".to_string(),
            n_a: 10,
            n_b: 12,
            normality_a: outcome(if transform == Transform::None { 0.5 } else { 0.01 }),
            normality_b: outcome(0.4),
            transform,
            bartlett: outcome(0.3),
            variance: VarianceAssumption::Equal,
            ttest: TestOutcome {
                statistic: -2.5,
                pvalue,
            },
            verdict: Verdict::from_pvalue(pvalue),
        }
    }

    #[test]
    fn test_render_comparison_normal() {
        let text = render_comparison(&comparison(Transform::None, 0.0000081289));

        assert!(text.starts_with("Os dados seguem uma distribuição normal."));
        assert!(text.contains("- H<sub>0</sub>: μ<sub>Feminino</sub>   =   μ<sub>Masculino</sub>"));
        assert!(text.contains("- H<sub>1</sub>: μ<sub>Feminino</sub>   ≠   μ<sub>Masculino</sub>"));
        assert!(text.contains("Como p-value (0.000008) é menor que 0.05"));
        assert!(text.ends_with("são diferentes."));
        assert!(text.contains("t de Student"));
    }

    #[test]
    fn test_render_comparison_alpha_boundary() {
        let text = render_comparison(&comparison(Transform::Log, 0.05));

        assert!(text.contains("transformação logarítmica"));
        assert!(text.contains("Como p-value (0.050000) é maior que 0.05"));
        assert!(text.ends_with("são iguais."));
    }

    #[test]
    fn test_render_comparison_boxcox() {
        let transform = Transform::BoxCox {
            lambda_a: 0.25,
            lambda_b: -0.5,
        };
        let text = render_comparison(&comparison(transform, 0.2));
        assert!(text.contains("não seguem uma distribuição normal"));
        assert!(text.contains("transformação Box-Cox"));
        assert!(text.contains("-0.5000"));
    }

    #[test]
    fn test_render_descriptive_missing_plot() {
        let report = DescriptiveReport {
            variable: Variable::Role,
            summaries: vec![CategorySummary {
                category: "Analista".to_string(),
                n: 1,
                mean: 5000.0,
                std: f64::NAN,
                ci: ConfidenceInterval::undefined(),
                min: 5000.0,
                q1: 5000.0,
                median: 5000.0,
                q3: 5000.0,
                max: 5000.0,
            }],
            plot: Ok(ArtifactRef {
                id: "boxplot-0000000000000000.svg".to_string(),
                path: "/nonexistent/boxplot-0000000000000000.svg".into(),
            }),
        };

        let text = render_descriptive(&report);
        assert!(text.starts_with("### 📊 Sumário descritivo\n| Cargo | count |"));
        assert!(text.contains("| Analista | 1 | 5000.00 | nan | 5000.00 |"));
        assert!(text.contains("Erro ao carregar imagem:"));
        assert!(text.contains("- Analista:\n  - **IC Inferior:** NaN\n  - **IC Superior:** NaN"));
    }

    #[test]
    fn test_render_descriptive_unsaved_plot() {
        let report = DescriptiveReport {
            variable: Variable::Gender,
            summaries: vec![],
            plot: Err("disk full".to_string()),
        };

        let text = render_descriptive(&report);
        assert!(text.starts_with("### 📊 Sumário descritivo\n| Genero | count |"));
        assert!(text.contains("Erro ao carregar imagem: disk full"));
        assert!(text.contains("### 📏 Intervalo de confiança para a média"));
    }

    #[test]
    fn test_render_error_empty_sample() {
        let err = DashboardError::EmptySample {
            variable: "Cargo".to_string(),
            category: "Gerente".to_string(),
        };
        let text = render_error(&err);
        assert!(text.contains("Gerente"));
        assert!(text.contains("Não é possível realizar o teste"));
    }
}
