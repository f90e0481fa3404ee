//! Forwarding DOM events to optional caller callbacks.

use leptos::prelude::*;

/// Run `callback` with `value`, if the caller supplied one.
pub fn notify<T: 'static>(callback: Option<&Callback<T>>, value: T) {
    if let Some(callback) = callback {
        callback.run(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_runs_supplied_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let seen = RwSignal::new(Vec::<String>::new());
            let on_change = Callback::new(move |value: String| seen.update(|s| s.push(value)));

            notify(Some(&on_change), "a".to_string());
            notify(Some(&on_change), "ab".to_string());

            assert_eq!(seen.get_untracked(), vec!["a".to_string(), "ab".to_string()]);
        });
    }

    #[test]
    fn test_notify_without_callback_is_a_no_op() {
        notify::<u32>(None, 7);
    }
}
