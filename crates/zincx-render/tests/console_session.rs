//! Integration tests for a console backend driven through a `BackendHandle`.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use zincx_core::{RenderMode, TextAlignment};
use zincx_render::{
    BackendHandle, BackendState, Circle, Color, ConsoleBackend, Line, Padding, Point, Rect,
    RenderBackend, RenderError, Size,
};

/// A writer whose buffer stays readable after the backend is boxed.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.borrow().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_full_session_output() {
    let buffer = SharedBuffer::default();
    let mut handle = BackendHandle::new(ConsoleBackend::new(buffer.clone()));
    assert_eq!(handle.state(), BackendState::Uninitialized);

    handle.initialize(RenderMode::Graphics16).unwrap();
    assert_eq!(handle.state().mode(), Some(RenderMode::Graphics16));

    let frame = Rect::new(0, 0, 20, 6);
    handle.fill_rect(frame, Color::DARK_GRAY).unwrap();
    handle.draw_rect(frame, Color::WHITE).unwrap();
    handle
        .draw_line(Line::new(Point::new(0, 5), Point::new(19, 5)), Color::LIGHT_GRAY)
        .unwrap();
    handle.draw_circle(Circle::new(Point::new(3, 3), 2), Color::RED, false).unwrap();
    handle.fill_ellipse(Point::new(10, 3), Size::new(6, 2), Color::GREEN).unwrap();
    handle
        .draw_text("OK", frame.deflate(&Padding::uniform(1)), Color::WHITE, TextAlignment::Right)
        .unwrap();

    let lines = buffer.lines();
    assert_eq!(
        lines,
        vec![
            "Console Graphics Backend Initialized with mode: Graphics16",
            "Filling rect at 0,0 with size 20x6 and color (64,64,64)",
            "Drawing rect outline at 0,0 with size 20x6 and color (255,255,255)",
            "Drawing line from (0,5) to (19,5) with color (192,192,192)",
            "Drawing circle at (3,3) with radius 2 and color (255,0,0)",
            "Drawing filled ellipse at (10,3) with size 6x2 and color (0,255,0)",
            "Drawing text 'OK' at bounds 1,1 with size 18x4 and color (255,255,255) aligned Right",
        ]
    );
    assert_eq!(handle.stats().draw_calls, 6);
    assert_eq!(handle.stats().failed_calls, 0);
}

#[test]
fn test_nothing_written_before_initialize() {
    let buffer = SharedBuffer::default();
    let mut handle = BackendHandle::new(ConsoleBackend::new(buffer.clone()));

    let err = handle.fill_rect(Rect::new(0, 0, 1, 1), Color::RED).unwrap_err();
    assert!(matches!(err, RenderError::NotInitialized));
    assert!(buffer.lines().is_empty());
}
