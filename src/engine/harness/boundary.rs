use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
    static CAPTURED_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

/// Panic raised inside a guarded check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPanic {
    pub payload: String,
    pub backtrace: Option<String>,
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "check panicked: {}", self.payload)?;
        if let Some(trace) = &self.backtrace {
            write!(f, "\n{trace}")?;
        }
        Ok(())
    }
}

/// Runs `body`, turning a panic into [`CaughtPanic`].
///
/// While a guard is active on this thread, the process panic hook records
/// the backtrace instead of printing the panic.
pub fn guard<T>(body: impl FnOnce() -> T) -> Result<T, CaughtPanic> {
    install_hook();
    let previous = GUARDED.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(body));
    GUARDED.with(|flag| flag.set(previous));

    result.map_err(|payload| CaughtPanic {
        payload: payload_to_string(payload.as_ref()),
        backtrace: CAPTURED_TRACE.with(|slot| slot.borrow_mut().take()),
    })
}

/// Renders an error with its `source` chain, one cause per line.
pub fn describe_fault(fault: &(dyn Error + 'static)) -> String {
    let mut text = fault.to_string();
    let mut source = fault.source();
    while let Some(cause) = source {
        text.push_str("\ncaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn install_hook() {
    HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if GUARDED.with(Cell::get) {
                let trace = Backtrace::force_capture().to_string();
                CAPTURED_TRACE.with(|slot| *slot.borrow_mut() = Some(trace));
            } else {
                default_hook(info);
            }
        }));
    });
}

fn payload_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
