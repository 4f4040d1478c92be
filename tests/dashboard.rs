use salary_insights::{
    ArtifactStore, Dashboard, DashboardError, Dataset, Transform, VarianceAssumption, Variable,
    Verdict,
};

const SURVEY: &str = "\
Cargo,Carreira,Genero,Raça,Experiencia,Faixa salarial
Analista,Junior,Feminino,Parda,1-2 anos,5000
Analista,Pleno,Masculino,Branca,3-4 anos,6000
Cientista,Senior,Feminino,Branca,5-6 anos,9000
Analista,Junior,Feminino,Preta,1-2 anos,5500
Cientista,Pleno,Masculino,Parda,3-4 anos,9500
Analista,Senior,Masculino,Branca,5-6 anos,5800
Cientista,Senior,Feminino,Amarela,7-10 anos,9200
Cientista,Pleno,Masculino,Branca,3-4 anos,8900
Gerente,Gestor,Feminino,,Mais de 10 anos,
Gerente,Gestor,Masculino,Branca,Mais de 10 anos,
Estagiario,Junior,Feminino,Parda,Menos de 1 ano,2000
";

fn setup() -> (tempfile::TempDir, Dashboard) {
    let dir = tempfile::tempdir().unwrap();
    let dataset = Dataset::from_reader(SURVEY.as_bytes()).unwrap();
    let dashboard = Dashboard::new(dataset, ArtifactStore::new(dir.path()));
    (dir, dashboard)
}

#[test]
fn describe_reports_every_category_in_order() {
    let (_dir, dashboard) = setup();
    let report = dashboard.describe(Variable::Role).unwrap();

    let names: Vec<&str> = report.summaries.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["Analista", "Cientista", "Gerente", "Estagiario"]);

    let analista = &report.summaries[0];
    assert_eq!(analista.n, 4);
    assert!((analista.mean - 5575.0).abs() < 1e-9);
    let half = 1.96 * (567500.0f64 / 3.0).sqrt() / 2.0;
    assert!((analista.ci.lower - (5575.0 - half)).abs() < 1e-6);
    assert!((analista.ci.upper - (5575.0 + half)).abs() < 1e-6);
}

#[test]
fn all_null_category_is_reported_without_error() {
    let (_dir, dashboard) = setup();
    let report = dashboard.describe(Variable::Role).unwrap();

    let gerente = &report.summaries[2];
    assert_eq!(gerente.n, 0);
    assert!(gerente.mean.is_nan());
    assert!(gerente.ci.lower.is_nan() && gerente.ci.upper.is_nan());
}

#[test]
fn single_observation_has_undefined_spread() {
    let (_dir, dashboard) = setup();
    let report = dashboard.describe(Variable::Role).unwrap();

    let estagiario = &report.summaries[3];
    assert_eq!(estagiario.n, 1);
    assert!(estagiario.std.is_nan());
    assert!(estagiario.ci.lower.is_nan());
}

#[test]
fn null_categorical_values_are_not_categories() {
    let (_dir, dashboard) = setup();
    assert_eq!(
        dashboard.categories(Variable::Race),
        vec!["Parda", "Branca", "Preta", "Amarela"]
    );
}

#[test]
fn describe_is_idempotent() {
    let (_dir, dashboard) = setup();
    let first = dashboard.describe(Variable::Gender).unwrap();
    let second = dashboard.describe(Variable::Gender).unwrap();

    assert!(first.plot.is_ok());
    assert_eq!(first.plot, second.plot);
    assert_eq!(first.summaries.len(), second.summaries.len());
    for (a, b) in first.summaries.iter().zip(&second.summaries) {
        assert_eq!(a.category, b.category);
        assert_eq!(a.n, b.n);
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(a.std.to_bits(), b.std.to_bits());
    }
}

#[test]
fn describe_narrative_embeds_plot() {
    let (_dir, dashboard) = setup();
    let text = dashboard.describe_narrative(Variable::Role);

    assert!(text.contains("### 📊 Sumário descritivo"));
    assert!(text.contains("### 📈 Visualização gráfica"));
    assert!(text.contains("![Salario por Cargo](data:image/svg+xml;base64,"));
    assert!(text.contains("### 📏 Intervalo de confiança para a média (95% de confiança)"));
    assert!(text.contains("- Cientista:\n  - **IC Inferior:**"));
}

#[test]
fn describe_narrative_survives_unwritable_artifact_dir() {
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let dataset = Dataset::from_reader(SURVEY.as_bytes()).unwrap();
    let dashboard = Dashboard::new(dataset, ArtifactStore::new(blocker.path()));

    let report = dashboard.describe(Variable::Role).unwrap();
    assert!(report.plot.is_err());

    let text = dashboard.describe_narrative(Variable::Role);
    assert!(text.contains("### 📊 Sumário descritivo"));
    assert!(text.contains("| Analista | 4 | 5575.00 |"));
    assert!(text.contains("Erro ao carregar imagem:"));
    assert!(text.contains("- Cientista:\n  - **IC Inferior:**"));
}

#[test]
fn compare_normal_groups_uses_student_test() {
    let (_dir, dashboard) = setup();
    let result = dashboard.compare(Variable::Role, "Analista", "Cientista").unwrap();

    assert_eq!(result.transform, Transform::None);
    assert!(result.bartlett.pvalue > 0.05);
    assert_eq!(result.variance, VarianceAssumption::Equal);
    assert!(result.ttest.pvalue < 0.001);
    assert_eq!(result.verdict, Verdict::Different);

    let text = dashboard.compare_narrative(Variable::Role, "Analista", "Cientista");
    assert!(text.starts_with("Os dados seguem uma distribuição normal."));
    assert!(text.contains("H<sub>0</sub>: μ<sub>Analista</sub>   =   μ<sub>Cientista</sub>"));
    assert!(text.contains("Como p-value (0.000008) é menor que 0.05"));
    assert!(text.ends_with("as médias das categorias são diferentes."));
}

#[test]
fn compare_is_deterministic() {
    let (_dir, dashboard) = setup();
    let first = dashboard.compare_narrative(Variable::Role, "Analista", "Cientista");
    let second = dashboard.compare_narrative(Variable::Role, "Analista", "Cientista");
    assert_eq!(first, second);
}

#[test]
fn empty_category_short_circuits() {
    let (_dir, dashboard) = setup();
    let err = dashboard.compare(Variable::Role, "Gerente", "Analista").unwrap_err();
    assert!(matches!(err, DashboardError::EmptySample { .. }));

    let text = dashboard.compare_narrative(Variable::Role, "Gerente", "Analista");
    assert!(text.contains("Gerente"));
    assert!(!text.contains("p-value"));
}

#[test]
fn comparison_choices_exclude_first_category() {
    let (_dir, dashboard) = setup();
    assert_eq!(
        dashboard.comparison_choices(Variable::Role, "Cientista"),
        vec!["Analista", "Gerente", "Estagiario"]
    );
}

#[test]
fn unreadable_dataset_is_a_data_access_error() {
    let err = Dataset::from_path("/nonexistent/base_final.csv").unwrap_err();
    assert!(matches!(err, DashboardError::DataAccess { .. }));
}
