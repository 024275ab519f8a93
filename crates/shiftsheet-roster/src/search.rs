//! Personnel roster search
//!
//! The query surface behind the name-entry form: filter the member roster
//! by bureau, grade and job, and check whether a member is already placed
//! in a given slot column of the job sheet.

use std::ops::RangeInclusive;

use shiftsheet_core::Grid;

/// Column positions of the member roster sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberColumns {
    /// Column holding the member's bureau
    pub bureau: u16,
    /// Column holding the member's grade
    pub grade: u16,
    /// Column holding the member's display name
    pub name: u16,
    /// Columns holding the member's assignable jobs
    pub jobs: RangeInclusive<u16>,
}

impl Default for MemberColumns {
    fn default() -> Self {
        // Standard roster sheet positions
        Self {
            bureau: 1,
            grade: 3,
            name: 4,
            jobs: 7..=16,
        }
    }
}

/// One member of the personnel roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub bureau: String,
    pub grade: String,
    pub name: String,
    /// Jobs this member can be assigned to
    pub jobs: Vec<String>,
}

/// The personnel roster, read once from a sheet grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDirectory {
    members: Vec<Member>,
}

impl MemberDirectory {
    /// Build a directory from a roster grid; rows without a name are skipped
    pub fn from_grid(grid: &Grid, columns: &MemberColumns) -> Self {
        let mut members = Vec::new();

        for row in 0..grid.rows() {
            let name = grid.get(row, columns.name);
            if name.is_empty() {
                continue;
            }

            let jobs = columns
                .jobs
                .clone()
                .filter(|&col| col < grid.cols())
                .map(|col| grid.get(row, col))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();

            members.push(Member {
                bureau: grid.get(row, columns.bureau).to_string(),
                grade: grid.get(row, columns.grade).to_string(),
                name: name.to_string(),
                jobs,
            });
        }

        Self { members }
    }

    /// All members, in roster order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Members matching a filter, in roster order
    pub fn filter<'a>(&'a self, filter: &MemberFilter) -> Vec<&'a Member> {
        self.members.iter().filter(|m| filter.matches(m)).collect()
    }

    /// Distinct job names of the members matching a filter, in first-seen order
    pub fn job_options(&self, filter: &MemberFilter) -> Vec<String> {
        let mut jobs: Vec<String> = Vec::new();
        for member in self.members.iter().filter(|m| filter.matches(m)) {
            for job in &member.jobs {
                if !jobs.contains(job) {
                    jobs.push(job.clone());
                }
            }
        }
        jobs
    }
}

/// Filter over the member roster; `None` means "all"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub bureau: Option<String>,
    pub grade: Option<String>,
    pub job: Option<String>,
}

impl MemberFilter {
    /// Check a member against the filter
    pub fn matches(&self, member: &Member) -> bool {
        if let Some(bureau) = &self.bureau {
            if bureau != &member.bureau {
                return false;
            }
        }
        if let Some(grade) = &self.grade {
            if grade != &member.grade {
                return false;
            }
        }
        if let Some(job) = &self.job {
            if !member.jobs.iter().any(|j| j == job) {
                return false;
            }
        }
        true
    }
}

/// Check whether `name` already appears anywhere in a slot column of the
/// job grid — the "already placed here" marker next to search results
pub fn is_placed(job_grid: &Grid, slot: u16, name: &str) -> bool {
    if name.is_empty() || slot >= job_grid.cols() {
        return false;
    }
    (0..job_grid.rows()).any(|row| job_grid.get(row, slot) == name)
}
