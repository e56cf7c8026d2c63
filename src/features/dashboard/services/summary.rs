use crate::core::models::{Client, Project, ProjectStatus};

/// One wedge of the "all projects" chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub total_clients: usize,
    pub total_value: f64,
    pub status_slices: Vec<StatusSlice>,
    pub active_projects: Vec<Project>,
}

impl DashboardSummary {
    pub fn build(projects: &[Project], clients: &[Client], active_limit: usize) -> Self {
        let total_value = projects.iter().map(|p| p.value.unwrap_or(0.0)).sum();

        let count = |statuses: &[ProjectStatus]| {
            projects
                .iter()
                .filter(|p| p.status.is_some_and(|s| statuses.contains(&s)))
                .count()
        };

        let status_slices = vec![
            StatusSlice {
                label: "Completos",
                count: count(&[ProjectStatus::Finished]),
                color: "#00E599",
            },
            StatusSlice {
                label: "Pendentes",
                count: count(&[ProjectStatus::InProgress, ProjectStatus::FollowUp]),
                color: "#FFD572",
            },
            StatusSlice {
                label: "Não começou",
                count: count(&[
                    ProjectStatus::New,
                    ProjectStatus::Negotiating,
                    ProjectStatus::ImageReceived,
                ]),
                color: "#BD63FF",
            },
        ];

        let active_projects = projects
            .iter()
            .filter(|p| p.status.is_some_and(|s| s.is_active()))
            .take(active_limit)
            .cloned()
            .collect();

        Self {
            total_projects: projects.len(),
            total_clients: clients.len(),
            total_value,
            status_slices,
            active_projects,
        }
    }
}

/// CSS `conic-gradient` for the projects donut. Empty data renders a plain ring.
pub fn donut_gradient(slices: &[StatusSlice]) -> String {
    let total: usize = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return "conic-gradient(#3B2A5A 0% 100%)".to_string();
    }

    let mut start = 0.0;
    let mut stops = Vec::new();
    for slice in slices.iter().filter(|s| s.count > 0) {
        let end = start + slice.count as f64 * 100.0 / total as f64;
        stops.push(format!("{} {:.2}% {:.2}%", slice.color, start, end));
        start = end;
    }
    format!("conic-gradient({})", stops.join(", "))
}

/// Case-insensitive search over project and client names.
pub fn filter_projects<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    let term = term.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.client_name.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, name: &str, status: Option<ProjectStatus>, value: Option<f64>) -> Project {
        Project {
            id,
            client_id: 1,
            client_name: "Wayne Enterprises".to_string(),
            name: name.to_string(),
            link: None,
            status,
            value,
            start_date: None,
            end_date: None,
        }
    }

    fn client(id: u64) -> Client {
        Client {
            id,
            name: "Bruce".to_string(),
            surname: "Wayne".to_string(),
            email: None,
            phone: None,
        }
    }

    #[test]
    fn totals_and_slices() {
        let projects = vec![
            project(1, "Batman", Some(ProjectStatus::InProgress), Some(100.0)),
            project(2, "Bender", Some(ProjectStatus::FollowUp), None),
            project(3, "BigFish", Some(ProjectStatus::Finished), Some(50.5)),
            project(4, "Canary", Some(ProjectStatus::New), Some(10.0)),
            project(5, "Casanova", Some(ProjectStatus::ImageReceived), None),
            project(6, "Ghost", None, Some(1.0)),
        ];
        let summary = DashboardSummary::build(&projects, &[client(1), client(2)], 5);

        assert_eq!(summary.total_projects, 6);
        assert_eq!(summary.total_clients, 2);
        assert_eq!(summary.total_value, 161.5);

        let counts: Vec<(&str, usize)> = summary.status_slices.iter().map(|s| (s.label, s.count)).collect();
        assert_eq!(counts, vec![("Completos", 1), ("Pendentes", 2), ("Não começou", 2)]);
    }

    #[test]
    fn active_projects_keep_order_and_limit() {
        let projects = vec![
            project(1, "A", Some(ProjectStatus::Finished), None),
            project(2, "B", Some(ProjectStatus::New), None),
            project(3, "C", Some(ProjectStatus::Negotiating), None),
            project(4, "D", Some(ProjectStatus::Unknown), None),
            project(5, "E", Some(ProjectStatus::FollowUp), None),
        ];
        let summary = DashboardSummary::build(&projects, &[], 2);
        let ids: Vec<u64> = summary.active_projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn empty_input_gives_zeroes() {
        let summary = DashboardSummary::build(&[], &[], 5);
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.total_value, 0.0);
        assert!(summary.status_slices.iter().all(|s| s.count == 0));
        assert!(summary.active_projects.is_empty());
    }

    #[test]
    fn donut_stops_follow_counts() {
        let slices = vec![
            StatusSlice { label: "Completos", count: 1, color: "#00E599" },
            StatusSlice { label: "Pendentes", count: 0, color: "#FFD572" },
            StatusSlice { label: "Não começou", count: 3, color: "#BD63FF" },
        ];
        assert_eq!(
            donut_gradient(&slices),
            "conic-gradient(#00E599 0.00% 25.00%, #BD63FF 25.00% 100.00%)"
        );
        assert_eq!(donut_gradient(&[]), "conic-gradient(#3B2A5A 0% 100%)");
    }

    #[test]
    fn search_matches_project_or_client() {
        let mut other = project(2, "Canary", None, None);
        other.client_name = "Queen Industries".to_string();
        let projects = vec![project(1, "Batman", None, None), other];

        assert_eq!(filter_projects(&projects, "").len(), 2);
        assert_eq!(filter_projects(&projects, "BAT")[0].id, 1);
        assert_eq!(filter_projects(&projects, "queen")[0].id, 2);
        assert!(filter_projects(&projects, "joker").is_empty());
    }
}
