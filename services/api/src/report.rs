use crate::cli::DataArgs;
use crate::infra::{apply_data_overrides, readiness_service};
use clap::Args;
use trl_insights::config::AppConfig;
use trl_insights::error::AppError;
use trl_insights::telemetry;
use trl_insights::workflows::readiness::{
    CohortInsightsView, OverviewMetrics, ProjectDetailView, ReadinessService, SnapshotSource,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Print the full report for the first project whose name contains this text
    #[arg(long)]
    pub(crate) project: Option<String>,
    /// List every project with its scores after the cohort summary
    #[arg(long)]
    pub(crate) list_projects: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        project,
        list_projects,
        data,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let data = apply_data_overrides(config.data, data);
    let service = readiness_service(&data);

    match project {
        Some(name) => {
            let detail = service.project_detail(&name)?;
            print!("{}", render_project(&detail));
        }
        None => {
            print!("{}", render_cohort(&service, list_projects)?);
        }
    }

    Ok(())
}

pub(crate) async fn run_refresh(args: DataArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let data = apply_data_overrides(config.data, args);
    let service = readiness_service(&data);

    let outcome = service.refresh().await?;
    println!(
        "Snapshot ready at {} ({} records, {:?})",
        data.snapshot_path.display(),
        outcome.records(),
        outcome
    );
    Ok(())
}

fn render_cohort<S>(service: &ReadinessService<S>, list_projects: bool) -> Result<String, AppError>
where
    S: SnapshotSource + 'static,
{
    let cohort = service.process()?;
    let overview = cohort.overview();
    let insights = CohortInsightsView::from(cohort.report());

    let mut out = render_overview(&overview);
    out.push_str(&render_insights(&insights));

    if list_projects {
        out.push_str("\nProjects\n");
        for project in &cohort.projects {
            out.push_str(&format!(
                "- {} [{}] early {:.1} | mid {:.1} | late {:.1} | total {:.1}{}\n",
                project.name,
                project.segment.label(),
                project.scores.early,
                project.scores.mid,
                project.scores.late,
                project.total_score,
                if project.approved { " | approved" } else { "" }
            ));
        }
    }

    Ok(out)
}

fn render_overview(overview: &OverviewMetrics) -> String {
    format!(
        "TRL readiness overview\n\
         - {} forms | highest TRL {} | {} approved\n\
         - faculty mentor: {} yes / {} no\n",
        overview.forms,
        overview.max_readiness_level,
        overview.approved,
        overview.mentor_yes,
        overview.mentor_no
    )
}

fn render_insights(view: &CohortInsightsView) -> String {
    let mut out = String::from("\nSegment distribution\n");
    for entry in &view.metrics.distribution {
        out.push_str(&format!("  - {}: {}\n", entry.segment_label, entry.count));
    }

    out.push_str("\nTop projects\n");
    if view.metrics.top_projects.is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, project) in view.metrics.top_projects.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} ({:.1} pts)\n",
            rank + 1,
            project.name,
            project.total_score
        ));
    }

    out.push_str("\nCohort insights\n");
    for line in &view.insights {
        out.push_str(&format!("  - {line}\n"));
    }
    out
}

fn render_project(detail: &ProjectDetailView) -> String {
    let mut out = format!(
        "Project report: {}\n\
         Generated {}\n\
         - status: {}\n\
         - TRL {} ({})\n\
         - faculty mentor: {} | English: {} | location: {} | industry: {}\n\
         - scores: TRL 1-3 {:.1} | TRL 4-7 {:.1} | TRL 8-9 {:.1} | bonus {:.1} | total {:.1}\n",
        detail.name,
        detail.generated_at.format("%d/%m/%Y %H:%M"),
        if detail.approved {
            "Approved"
        } else {
            "Not approved"
        },
        detail.readiness_level,
        detail.segment_label,
        if detail.mentor { "Yes" } else { "No" },
        detail.english_label,
        detail.location,
        detail.industry,
        detail.early_score,
        detail.mid_score,
        detail.late_score,
        detail.bonus,
        detail.total_score,
    );

    out.push_str("\nInsights\n");
    for line in &detail.insights {
        out.push_str(&format!("  - {line}\n"));
    }
    out
}
