use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// Output sink receiving rendered statements.
pub trait Console {
    fn print(&self, text: &str);
}

impl<T: Console + ?Sized> Console for &T {
    fn print(&self, text: &str) {
        (**self).print(text)
    }
}

impl<T: Console + ?Sized> Console for Rc<T> {
    fn print(&self, text: &str) {
        (**self).print(text)
    }
}

impl<T: Console + ?Sized> Console for Box<T> {
    fn print(&self, text: &str) {
        (**self).print(text)
    }
}

/// Writes each printed text to stdout followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = writeln!(handle, "{text}").and_then(|_| handle.flush()) {
            tracing::warn!(error = %err, "failed to write to stdout");
        }
    }
}

/// Keeps every printed text in memory, in call order.
#[derive(Debug, Default)]
pub struct BufferConsole {
    printed: RefCell<Vec<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.printed.borrow().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.printed.borrow().len()
    }
}

impl Console for BufferConsole {
    fn print(&self, text: &str) {
        self.printed.borrow_mut().push(text.to_string());
    }
}
