use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub toast_duration: Duration,
    pub revalidate_on_change: bool,
    pub confirm_exit: bool,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            toast_duration: Duration::from_millis(4000),
            revalidate_on_change: true,
            confirm_exit: true,
            show_help: true,
        }
    }
}

impl UiOptions {
    /// Re-check edited fields once a submit has been attempted.
    pub fn with_revalidate(mut self, enabled: bool) -> Self {
        self.revalidate_on_change = enabled;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }
}
