use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_diagonal::core::GameSession;
use tui_diagonal::input::{Gesture, PointerTracker, SwipeClassifier};
use tui_diagonal::term::board::{ALERT_FILL, TOKEN_FILL};
use tui_diagonal::term::{AnchorY, GameView, Viewport};
use tui_diagonal::types::{Direction, GameAction, GridPosition};

fn screen_text(fb: &tui_diagonal::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn title_screen_before_start() {
    let session = GameSession::new();
    let mut view = GameView::new();
    let vp = Viewport::new(60, 30);
    view.resize(vp);
    let fb = view.render(&session.snapshot(), vp);
    let all = screen_text(&fb);
    assert!(all.contains("Play"));
    assert!(!all.contains("(3, 3)"));
}

#[test]
fn play_button_starts_the_game() {
    let mut session = GameSession::new();
    let mut view = GameView::new();
    let vp = Viewport::new(60, 30);
    view.resize(vp);

    let fb = view.render(&session.snapshot(), vp);
    let (mut hit_x, mut hit_y) = (None, None);
    for y in 0..fb.height() {
        if let Some(x) = fb.row_text(y).find("Play") {
            hit_x = Some(x as u16);
            hit_y = Some(y);
        }
    }
    let action = view.hit_test(&session.snapshot(), vp, hit_x.unwrap(), hit_y.unwrap());
    assert_eq!(action, Some(GameAction::Start));
    assert!(session.apply_action(action.unwrap()));
    assert!(session.started());
}

#[test]
fn active_screen_shows_grid_coordinates_and_buttons() {
    let mut session = GameSession::new();
    session.start();
    let mut view = GameView::new();
    let vp = Viewport::new(60, 30);
    view.resize(vp);

    let fb = view.render(&session.snapshot(), vp);
    let all = screen_text(&fb);
    assert!(all.contains("(3, 3)"));
    assert!(all.contains('▀'));
    for dir in Direction::ALL {
        assert!(all.contains(dir.arrow()));
    }
}

#[test]
fn buttons_map_to_their_directions() {
    let mut session = GameSession::new();
    session.start();
    let mut view = GameView::new();
    let vp = Viewport::new(60, 30);
    view.resize(vp);
    let layout = view.layout(vp);

    for (b, dir) in layout.buttons.iter().zip(Direction::ALL) {
        assert_eq!(
            view.hit_test(&session.snapshot(), vp, b.x + 1, b.y),
            Some(GameAction::Move(dir))
        );
    }
    assert_eq!(view.hit_test(&session.snapshot(), vp, 0, 0), None);
}

#[test]
fn rejected_move_recolors_token_in_place() {
    let mut session = GameSession::new();
    session.start();
    for _ in 0..3 {
        session.attempt_move(Direction::UpLeft);
    }
    let mut view = GameView::new().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(60, 30);
    view.resize(vp);
    let layout = view.layout(vp);
    let cell_px = (view.metrics().cell_w / 2.0) as u16;
    // Token center for cell (0, 0): half a cell in, on the top pixel row of its terminal row.
    let tx = layout.surface_x + cell_px;
    let ty = layout.surface_y + cell_px / 2;

    let fb = view.render(&session.snapshot(), vp);
    assert_eq!(fb.get(tx, ty).unwrap().style.fg, TOKEN_FILL);

    assert!(!session.attempt_move(Direction::UpLeft));
    let fb = view.render(&session.snapshot(), vp);
    assert_eq!(fb.get(tx, ty).unwrap().style.fg, ALERT_FILL);
    assert!(screen_text(&fb).contains("Out of bounds!"));
    assert!(screen_text(&fb).contains("(0, 0)"));

    session.advance(600);
    let fb = view.render(&session.snapshot(), vp);
    assert_eq!(fb.get(tx, ty).unwrap().style.fg, TOKEN_FILL);
}

#[test]
fn identical_state_renders_identical_frames() {
    let mut session = GameSession::new();
    session.start();
    session.attempt_move(Direction::DownLeft);
    let mut view = GameView::new();
    let vp = Viewport::new(50, 26);
    view.resize(vp);
    assert_eq!(
        view.render(&session.snapshot(), vp),
        view.render(&session.snapshot(), vp)
    );
}

#[test]
fn tiny_terminal_shows_notice() {
    let mut session = GameSession::new();
    session.start();
    let mut view = GameView::new();
    let vp = Viewport::new(20, 8);
    view.resize(vp);
    assert_eq!(view.surface_side(), 0);
    let fb = view.render(&session.snapshot(), vp);
    assert!(screen_text(&fb).contains("too small"));
}

fn drag(tracker: &mut PointerTracker, from: (u16, u16), to: (u16, u16)) -> Option<Gesture> {
    let ev = |kind, (column, row): (u16, u16)| MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    tracker.handle_mouse_event(ev(MouseEventKind::Down(MouseButton::Left), from));
    tracker.handle_mouse_event(ev(MouseEventKind::Up(MouseButton::Left), to))
}

/// Route a gesture the way the runner does: swipes count only when the press
/// started on the drawing surface.
fn route_swipe(
    session: &mut GameSession,
    view: &GameView,
    vp: Viewport,
    g: Option<Gesture>,
) -> bool {
    match g {
        Some(Gesture::Swipe {
            direction,
            column,
            row,
        }) if view.layout(vp).surface_contains(column, row) => session.attempt_move(direction),
        _ => false,
    }
}

#[test]
fn drags_starting_off_the_surface_do_not_move() {
    let mut session = GameSession::new();
    session.start();
    let mut view = GameView::new();
    let vp = Viewport::new(60, 30);
    view.resize(vp);
    let layout = view.layout(vp);
    let mut tracker = PointerTracker::new(SwipeClassifier::new(4.0));

    // Starting on a direction button, below the surface.
    let b = layout.buttons[0];
    assert!(!layout.surface_contains(b.x + 1, b.y));
    let g = drag(&mut tracker, (b.x + 1, b.y), (b.x + 7, b.y + 3));
    assert!(matches!(g, Some(Gesture::Swipe { .. })));
    assert!(!route_swipe(&mut session, &view, vp, g));

    // Starting on the title row.
    let g = drag(&mut tracker, (30, layout.title_y), (36, layout.title_y + 3));
    assert!(!route_swipe(&mut session, &view, vp, g));
    assert_eq!(session.position(), GridPosition::center());

    // The same drag on the surface moves the token.
    let (x, y) = (layout.surface_x + layout.side / 2, layout.surface_y + 5);
    let g = drag(&mut tracker, (x, y), (x + 6, y + 3));
    assert!(route_swipe(&mut session, &view, vp, g));
    assert_eq!(session.position(), GridPosition::new(4, 4).unwrap());
}
