use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

/// What the driver should do in response to user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Stop the simulation and leave
    Exit,

    /// Pause or resume automatic stepping
    TogglePause,

    /// Advance a single generation. Only meaningful while paused
    Step,

    /// Start over from the initial pattern
    Reseed,

    /// Move the camera by some number of cells
    Pan { rows: isize, cols: isize },

    ResetView,

    /// The terminal now has `cols x rows` characters
    Resize { cols: u16, rows: u16 },
}

/// How many cells a single pan moves the camera
const PAN_STEP: isize = 8;

/// Converts a crossterm event into a driver event
pub fn convert_event(event: CtEvent) -> Option<Event> {
    match event {
        CtEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CtEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::TogglePause),
            KeyEvent {
                code: KeyCode::Char('n'),
                ..
            } => Some(Event::Step),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(Event::Reseed),
            KeyEvent {
                code: KeyCode::Char('h') | KeyCode::Left,
                ..
            } => Some(Event::Pan {
                rows: 0,
                cols: -PAN_STEP,
            }),
            KeyEvent {
                code: KeyCode::Char('j') | KeyCode::Down,
                ..
            } => Some(Event::Pan {
                rows: PAN_STEP,
                cols: 0,
            }),
            KeyEvent {
                code: KeyCode::Char('k') | KeyCode::Up,
                ..
            } => Some(Event::Pan {
                rows: -PAN_STEP,
                cols: 0,
            }),
            KeyEvent {
                code: KeyCode::Char('l') | KeyCode::Right,
                ..
            } => Some(Event::Pan {
                rows: 0,
                cols: PAN_STEP,
            }),
            KeyEvent {
                code: KeyCode::Char('0'),
                ..
            } => Some(Event::ResetView),
            _ => None,
        },
        CtEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}
