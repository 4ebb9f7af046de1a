use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardSection {
    #[default]
    Overview,
    Vacations,
    Calendar,
    Users,
}

impl DashboardSection {
    pub fn available(is_admin: bool) -> Vec<Self> {
        let mut sections = vec![
            DashboardSection::Overview,
            DashboardSection::Vacations,
            DashboardSection::Calendar,
        ];
        if is_admin {
            sections.push(DashboardSection::Users);
        }
        sections
    }

    pub fn label(&self, is_admin: bool) -> &'static str {
        match self {
            DashboardSection::Overview => "Overview",
            DashboardSection::Vacations if is_admin => "All requests",
            DashboardSection::Vacations => "My requests",
            DashboardSection::Calendar => "Calendar",
            DashboardSection::Users => "Users",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub section: DashboardSection,
    pub form_open: bool,
    /// Bumped whenever the request list must re-fetch.
    pub refresh: u32,
}

impl DashboardState {
    pub fn open(self, section: DashboardSection, is_admin: bool) -> Self {
        if !DashboardSection::available(is_admin).contains(&section) {
            return self;
        }
        Self { section, ..self }
    }

    pub fn open_form(self) -> Self {
        Self {
            form_open: true,
            ..self
        }
    }

    pub fn close_form(self) -> Self {
        Self {
            form_open: false,
            ..self
        }
    }

    pub fn submitted(self) -> Self {
        Self {
            section: DashboardSection::Vacations,
            form_open: false,
            refresh: self.refresh.wrapping_add(1),
        }
    }
}

/// Section of the dashboard state, notifying only when the section changes.
pub fn active_section(state: RwSignal<DashboardState>) -> Memo<DashboardSection> {
    create_memo(move |_| state.with(|s| s.section))
}

pub fn refresh_counter(state: RwSignal<DashboardState>) -> Memo<u32> {
    create_memo(move |_| state.with(|s| s.refresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_section_is_admin_only() {
        assert!(!DashboardSection::available(false).contains(&DashboardSection::Users));
        assert!(DashboardSection::available(true).contains(&DashboardSection::Users));

        let state = DashboardState::default().open(DashboardSection::Users, false);
        assert_eq!(state.section, DashboardSection::Overview);
        let state = state.open(DashboardSection::Users, true);
        assert_eq!(state.section, DashboardSection::Users);
    }

    #[test]
    fn submission_closes_form_and_bumps_refresh() {
        let state = DashboardState::default()
            .open(DashboardSection::Calendar, false)
            .open_form();
        assert!(state.form_open);

        let state = state.submitted();
        assert_eq!(
            state,
            DashboardState {
                section: DashboardSection::Vacations,
                form_open: false,
                refresh: 1,
            }
        );
        assert_eq!(state.close_form().refresh, 1);
    }

    #[test]
    fn vacations_label_follows_role() {
        assert_eq!(DashboardSection::Vacations.label(true), "All requests");
        assert_eq!(DashboardSection::Vacations.label(false), "My requests");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn reopening_active_section_does_not_notify_readers() {
        with_runtime(|| {
            let state = create_rw_signal(DashboardState::default());
            let section = active_section(state);
            let runs = Rc::new(Cell::new(0));
            let reader = {
                let runs = Rc::clone(&runs);
                create_memo(move |_| {
                    runs.set(runs.get() + 1);
                    section.get()
                })
            };

            state.update(|s| *s = std::mem::take(s).open(DashboardSection::Vacations, false));
            assert_eq!(reader.get(), DashboardSection::Vacations);
            assert_eq!(runs.get(), 1);

            state.update(|s| *s = std::mem::take(s).open(DashboardSection::Vacations, false));
            state.update(|s| *s = std::mem::take(s).open_form());
            assert_eq!(reader.get(), DashboardSection::Vacations);
            assert_eq!(runs.get(), 1);

            state.update(|s| *s = std::mem::take(s).open(DashboardSection::Calendar, false));
            assert_eq!(reader.get(), DashboardSection::Calendar);
            assert_eq!(runs.get(), 2);
        });
    }

    #[test]
    fn refresh_counter_follows_submissions() {
        with_runtime(|| {
            let state = create_rw_signal(DashboardState::default());
            let refresh = refresh_counter(state);
            assert_eq!(refresh.get(), 0);
            state.update(|s| *s = std::mem::take(s).submitted());
            assert_eq!(refresh.get(), 1);
        });
    }
}
