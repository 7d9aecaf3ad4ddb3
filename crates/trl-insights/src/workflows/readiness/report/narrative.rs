use super::super::segment::TrlSegment;
use super::summary::CohortReport;

impl CohortReport {
    /// Summary lines for the cohort, in display order: approvals, top
    /// performer, distribution, averages, strategic recommendation.
    pub fn narrative(&self) -> Vec<String> {
        let top = match self.top_projects.first() {
            Some(project) => format!(
                "Top performer: {} ({:.1} pts)",
                project.name, project.total_score
            ),
            None => "Top performer: none available".to_string(),
        };

        let early = self.count(TrlSegment::Early);
        let late = self.count(TrlSegment::Late);
        let recommendation = if early > late {
            "Focus mentoring on TRL 1-3 projects"
        } else {
            "Prepare implementation strategies for mature projects"
        };

        vec![
            format!(
                "{} of {} projects are approved ({:.1}%)",
                self.approved, self.total_projects, self.approval_pct
            ),
            top,
            format!(
                "TRL distribution: {} early stage, {} in development, {} close to implementation",
                early,
                self.count(TrlSegment::Mid),
                late
            ),
            format!(
                "Average scores: TRL 1-3: {:.1}, TRL 4-7: {:.1}, TRL 8-9: {:.1}",
                self.averages.early, self.averages.mid, self.averages.late
            ),
            format!("Strategic recommendation: {recommendation}"),
        ]
    }
}
