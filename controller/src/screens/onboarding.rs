//! Onboarding pager

use shared::OnboardingPage;

/// Result of a pager action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerStep {
    /// Now showing the page at this index
    Moved(usize),
    /// Onboarding is over; the controller should take the user to auth
    Finished,
}

/// Page index over the onboarding pages
#[derive(Debug, Clone)]
pub struct OnboardingPager {
    pages: Vec<OnboardingPage>,
    index: usize,
}

impl OnboardingPager {
    pub fn new(pages: Vec<OnboardingPage>) -> Self {
        Self { pages, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[OnboardingPage] {
        &self.pages
    }

    pub fn current(&self) -> Option<&OnboardingPage> {
        self.pages.get(self.index)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.pages.len()
    }

    /// Forward one page, or finish on the last page
    pub fn next(&mut self) -> PagerStep {
        if self.is_last() {
            return PagerStep::Finished;
        }
        self.index += 1;
        PagerStep::Moved(self.index)
    }

    /// Back one page; no-op on the first
    pub fn previous(&mut self) -> PagerStep {
        self.index = self.index.saturating_sub(1);
        PagerStep::Moved(self.index)
    }

    pub fn skip(&mut self) -> PagerStep {
        PagerStep::Finished
    }

    /// Label of the primary button
    pub fn cta_label(&self) -> &'static str {
        if self.is_last() {
            "Get Started"
        } else {
            "Next"
        }
    }
}

impl Default for OnboardingPager {
    fn default() -> Self {
        Self::new(shared::catalog::onboarding_pages())
    }
}
