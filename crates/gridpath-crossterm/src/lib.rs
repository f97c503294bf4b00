//! Crossterm terminal back-end for gridpath.
//!
//! [`CrosstermDriver`] implements both capabilities the visualizer consumes:
//! [`Renderer`] paints frame diffs into the terminal and [`InputSource`]
//! turns terminal events into [`Msg`]s.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::debug;

use gridpath_core::Point;
use gridpath_ui::{AttrMask, Color, Context, Driver, Frame, InputSource, Key, Msg, MouseAction, Renderer};

/// Maps a [`Color`] to a crossterm colour.
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm key event to a [`Msg`]. Ctrl-C becomes [`Msg::Quit`].
fn key_msg(ev: KeyEvent) -> Option<Msg> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }
    let key = match ev.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(Msg::key(key))
}

fn button_action(btn: MouseButton) -> MouseAction {
    match btn {
        MouseButton::Left => MouseAction::Main,
        MouseButton::Right => MouseAction::Secondary,
        MouseButton::Middle => MouseAction::Auxiliary,
    }
}

/// Maps any crossterm event to a [`Msg`], if it has one.
fn event_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(k) => key_msg(k),
        Event::Mouse(me) => {
            let pos = Point::new(i32::from(me.row), i32::from(me.column));
            let action = match me.kind {
                // A held button keeps acting while dragged.
                MouseEventKind::Down(btn) | MouseEventKind::Drag(btn) => button_action(btn),
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::mouse(action, pos))
        }
        Event::Resize(cols, rows) => Some(Msg::Screen {
            rows: i32::from(rows),
            cols: i32::from(cols),
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm. Mouse events are always captured.
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self { active: false }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CrosstermDriver {
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
        let mut out = io::stdout().lock();

        for fc in &frame.cells {
            let p = fc.pos;
            let glyph = &fc.glyph;
            queue!(
                out,
                cursor::MoveTo(p.col as u16, p.row as u16),
                SetForegroundColor(to_ct_color(glyph.style.fg)),
                SetBackgroundColor(to_ct_color(glyph.style.bg))
            )?;

            let attrs = glyph.style.attrs;
            if attrs.contains(AttrMask::BOLD) {
                queue!(out, style::SetAttribute(Attribute::Bold))?;
            }
            if attrs.contains(AttrMask::REVERSE) {
                queue!(out, style::SetAttribute(Attribute::Reverse))?;
            }

            write!(out, "{}", glyph.ch)?;

            if attrs != AttrMask::NONE {
                queue!(out, style::SetAttribute(Attribute::Reset))?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl InputSource for CrosstermDriver {
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        timeout: Duration,
        out: &mut Vec<Msg>,
    ) -> Result<(), Box<dyn Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            if let Some(msg) = event_msg(event::read()?) {
                out.push(msg);
            }
        }

        Ok(())
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut out = io::stdout();
        crossterm::execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        debug!("crossterm driver initialised");
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = crossterm::execute!(
            io::stdout(),
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        debug!("crossterm driver closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_map_to_messages() {
        assert_eq!(
            event_msg(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Msg::key(Key::Space))
        );
        assert_eq!(
            event_msg(press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Msg::key(Key::Char('c')))
        );
        assert_eq!(
            event_msg(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
        assert_eq!(event_msg(press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(event_msg(ev), None);
    }

    #[test]
    fn mouse_positions_are_row_col() {
        assert_eq!(
            event_msg(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3)),
            Some(Msg::mouse(MouseAction::Main, Point::new(3, 7)))
        );
        assert_eq!(
            event_msg(mouse(MouseEventKind::Drag(MouseButton::Right), 1, 2)),
            Some(Msg::mouse(MouseAction::Secondary, Point::new(2, 1)))
        );
        assert_eq!(
            event_msg(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            Some(Msg::mouse(MouseAction::Release, Point::ZERO))
        );
        assert_eq!(event_msg(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn resize_reports_rows_and_cols() {
        assert_eq!(
            event_msg(Event::Resize(80, 24)),
            Some(Msg::Screen { rows: 24, cols: 80 })
        );
    }

    #[test]
    fn default_colour_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
