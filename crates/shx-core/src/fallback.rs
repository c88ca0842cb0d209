use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::ast::Page;

pub const ERROR_TITLE: &str = "Error";

/// The page a host shows in place of a translation that faulted.
pub fn error_page(message: &str) -> Page {
    Page {
        html: format!(
            "<div style=\"color: red; padding: 20px;\">Error: {}</div>",
            message
        ),
        title: ERROR_TITLE.to_string(),
    }
}

/// Translates `source`, turning any internal fault into [`error_page`].
pub fn translate_or_fallback(source: &str) -> Page {
    match panic::catch_unwind(AssertUnwindSafe(|| crate::translate(source))) {
        Ok(page) => page,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::error!(target: "shx.host", "translation failed: {}", message);
            error_page(&message)
        }
    }
}

/// Best-effort text of a `catch_unwind` payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{error_page, panic_message, translate_or_fallback};

    #[test]
    fn error_page_shape() {
        let page = error_page("boom");
        assert_eq!(page.title, "Error");
        assert_eq!(
            page.html,
            "<div style=\"color: red; padding: 20px;\">Error: boom</div>"
        );
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown error");
    }

    #[test]
    fn healthy_source_is_untouched() {
        let page = translate_or_fallback("page \"Ok\"");
        assert_eq!(page.title, "Ok");
    }
}
