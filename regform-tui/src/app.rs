//! Application loop and view routing

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use regform_lib::ViewId;

use crate::error::AppError;
use crate::event::{Key, KeyEvent, Modifiers};
use crate::screen::Screen;
use crate::views::{FormView, Router, SuccessView};

/// The active view.
#[derive(Debug)]
enum View {
    Form(Box<FormView>),
    Success(SuccessView),
}

/// Owns the terminal session, the active view, and the router. Single
/// threaded: one event in, one frame out.
pub struct App {
    screen: Screen,
    view: View,
    router: Router,
    quit: bool,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            screen: Screen::new()?,
            view: View::Form(Box::new(FormView::new())),
            router: Router::new(),
            quit: false,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        log::debug!("starting registration session");

        while !self.quit {
            self.draw()?;

            let event = self.screen.next_event()?;
            self.handle_event(event);

            // Apply any navigation the event raised: the payload moves into
            // the new view's constructor and nowhere else.
            if let Some((target, payload)) = self.router.take() {
                log::debug!("navigating to {target:?}");
                self.view = match target {
                    ViewId::Success => View::Success(SuccessView::new(payload)),
                    ViewId::Form => View::Form(Box::new(FormView::new())),
                };
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<(), AppError> {
        let (lines, cursor) = match &self.view {
            View::Form(form) => form.render(),
            View::Success(success) => (success.render(), None),
        };
        self.screen.draw(&lines, cursor)?;
        Ok(())
    }

    fn handle_event(&mut self, event: CrosstermEvent) {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(converted) = Key::from_code(key.code) else {
                    return;
                };
                let key_event = KeyEvent {
                    key: converted,
                    modifiers: Modifiers::from(key.modifiers),
                };

                if key_event.modifiers.ctrl
                    && matches!(key_event.key, Key::Char('q') | Key::Char('c'))
                {
                    self.quit = true;
                    return;
                }

                match &mut self.view {
                    View::Form(form) => form.handle_key(key_event, &mut self.router),
                    View::Success(success) => {
                        if success.handle_key(key_event) {
                            log::debug!("starting a fresh session");
                            self.view = View::Form(Box::new(FormView::new()));
                        }
                    }
                }
            }
            // The next draw reads the new size.
            CrosstermEvent::Resize(..) => {}
            _ => {}
        }
    }
}
