use crate::domain::GroupDraft;

use super::toast::Toasts;

pub const SUCCESS_MESSAGE: &str = "Group created successfully!";

/// Receives every draft that passed validation.
pub trait SubmitHandler {
    fn on_submit(&mut self, draft: &GroupDraft, toasts: &mut Toasts);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&GroupDraft, &mut Toasts),
{
    fn on_submit(&mut self, draft: &GroupDraft, toasts: &mut Toasts) {
        self(draft, toasts)
    }
}

/// Logs the payload and announces success. Nothing is stored or sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn on_submit(&mut self, draft: &GroupDraft, toasts: &mut Toasts) {
        match serde_json::to_string(draft) {
            Ok(payload) => tracing::info!(target: "groupform::submit", %payload, "group submitted"),
            Err(err) => tracing::warn!(target: "groupform::submit", %err, "failed to encode payload"),
        }
        toasts.success(SUCCESS_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn draft() -> GroupDraft {
        GroupDraft {
            group_name: "Book Club".into(),
            group_type: "Community".into(),
            other_group_type: None,
            group_description: None,
            group_cover_photo: None,
            group_location: None,
        }
    }

    #[test]
    fn log_handler_pushes_one_toast_per_call() {
        let mut toasts = Toasts::new(Duration::from_secs(4));
        let mut handler = LogSubmitHandler;
        handler.on_submit(&draft(), &mut toasts);
        handler.on_submit(&draft(), &mut toasts);
        let messages: Vec<_> = toasts.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec![SUCCESS_MESSAGE, SUCCESS_MESSAGE]);
    }

    #[test]
    fn closures_are_handlers() {
        let mut seen = Vec::new();
        let mut toasts = Toasts::new(Duration::from_secs(1));
        {
            let mut handler = |draft: &GroupDraft, _: &mut Toasts| seen.push(draft.clone());
            handler.on_submit(&draft(), &mut toasts);
        }
        assert_eq!(seen, vec![draft()]);
        assert!(toasts.is_empty());
    }
}
