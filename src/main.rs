//! Terminal front end for the salary dashboard.
//!
//! Reads selections from stdin: a variable, then two of its categories.
//! Narratives are printed as markdown on stdout; logs go to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use salary_insights::report::render_error;
use salary_insights::{Dashboard, DashboardOptions, Variable};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let options = DashboardOptions::default();
    init_tracing(&options.log_filter);

    let dashboard = match Dashboard::open(&options) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            return ExitCode::FAILURE;
        }
    };
    info!(rows = dashboard.dataset().len(), "dashboard ready");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    let _ = writeln!(
        out,
        "# Análise de dados do profissional da área de dados no Brasil em 2023\n"
    );

    loop {
        let variables: Vec<String> = Variable::ALL.iter().map(|v| v.label().to_string()).collect();
        let Some(choice) = prompt(&mut out, &mut lines, "Escolha a variável para análise", &variables)
        else {
            break;
        };
        let variable = match choice.parse::<Variable>() {
            Ok(v) => v,
            Err(e) => {
                let _ = writeln!(out, "{}\n", render_error(&e));
                continue;
            }
        };

        let _ = writeln!(out, "{}", dashboard.describe_narrative(variable));
        let _ = writeln!(out, "---\n\n### 🔍 Teste de Hipóteses para a média\n");

        let categories = dashboard.categories(variable);
        let Some(a) = prompt(
            &mut out,
            &mut lines,
            "Escolha a primeira categoria da variável",
            &categories,
        )
        .map(|c| resolve(&c, &categories)) else {
            break;
        };

        let choices = dashboard.comparison_choices(variable, &a);
        let Some(b) = prompt(
            &mut out,
            &mut lines,
            "Escolha a segunda categoria da variável",
            &choices,
        )
        .map(|c| resolve(&c, &choices)) else {
            break;
        };

        let _ = writeln!(out, "{}\n", dashboard.compare_narrative(variable, &a, &b));
    }

    ExitCode::SUCCESS
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Print a numbered menu and read one non-empty line; `None` on end of input.
fn prompt<W, L>(out: &mut W, lines: &mut L, title: &str, options: &[String]) -> Option<String>
where
    W: Write,
    L: Iterator<Item = io::Result<String>>,
{
    let _ = writeln!(out, "{}:", title);
    for (i, option) in options.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, option);
    }
    let _ = write!(out, "> ");
    let _ = out.flush();

    for line in lines.by_ref() {
        let line = line.ok()?;
        let line = line.trim();
        if !line.is_empty() {
            return Some(line.to_string());
        }
    }
    None
}

/// Accept a 1-based menu index or the category text itself.
fn resolve(input: &str, options: &[String]) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| options.get(i).cloned())
        .unwrap_or_else(|| input.to_string())
}
