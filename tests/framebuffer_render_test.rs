//! Rendering onto a real pixel buffer through the embedded-graphics adapter.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use tictouch::{
    BoardRenderer, Display, FrameBuffer, GraphicsDisplay, Palette, Player, Position, TicTacToe,
    TouchPoint,
};

fn game() -> TicTacToe<GraphicsDisplay<FrameBuffer>> {
    let display = GraphicsDisplay::new(FrameBuffer::new(240, 320).unwrap());
    TicTacToe::new(BoardRenderer::new(display, Palette::default()), false)
}

fn framebuffer(game: &TicTacToe<GraphicsDisplay<FrameBuffer>>) -> &FrameBuffer {
    game.renderer().display().target()
}

#[test]
fn test_grid_lines_span_panel() {
    let mut game = game();
    game.start().unwrap();
    let grid = Rgb565::from(Palette::default().grid);
    let fb = framebuffer(&game);

    for y in [0, 100, 250] {
        assert_eq!(fb.pixel(80, y), Some(grid), "vertical line at x=80, y={y}");
        assert_eq!(fb.pixel(160, y), Some(grid), "vertical line at x=160, y={y}");
    }
    for x in [0, 50, 239] {
        assert_eq!(fb.pixel(x, 106), Some(grid));
        assert_eq!(fb.pixel(x, 212), Some(grid));
    }
    assert_eq!(fb.pixel(40, 53), Some(Rgb565::BLACK));
}

#[test]
fn test_title_banner_drawn() {
    let mut game = game();
    game.start().unwrap();
    let fb = framebuffer(&game);

    assert!(fb.count(Rgb565::from(Palette::default().banner)) > 0);
    assert!(fb.count(Rgb565::from(Palette::default().text)) > 0);
}

#[test]
fn test_cross_endpoints_inset_in_cell() {
    let mut game = game();
    game.start().unwrap();
    game.handle_touch(TouchPoint::new(120, 160)).unwrap();

    let x_mark = Rgb565::from(Palette::default().x_mark);
    let fb = framebuffer(&game);
    // Center cell spans (80, 106)..(160, 212); margin is 80 / 5.
    assert_eq!(fb.pixel(96, 122), Some(x_mark));
    assert_eq!(fb.pixel(144, 196), Some(x_mark));
    assert_eq!(fb.pixel(144, 122), Some(x_mark));
    assert_eq!(fb.pixel(96, 196), Some(x_mark));
    assert_eq!(fb.pixel(85, 110), Some(Rgb565::BLACK));
}

#[test]
fn test_circle_is_hollow() {
    let mut game = game();
    game.start().unwrap();
    game.handle_touch(TouchPoint::new(120, 160)).unwrap();
    game.handle_touch(TouchPoint::new(40, 53)).unwrap();
    assert_eq!(game.state().board().get(Position::TopLeft).player(), Some(Player::O));

    let o_mark = Rgb565::from(Palette::default().o_mark);
    let fb = framebuffer(&game);
    assert!(fb.count(o_mark) > 50);
    assert_eq!(fb.pixel(40, 53), Some(Rgb565::BLACK));
}

#[test]
fn test_shutdown_blanks_panel() {
    let mut game = game();
    game.start().unwrap();
    game.handle_touch(TouchPoint::new(120, 160)).unwrap();
    game.shutdown().unwrap();

    assert_eq!(framebuffer(&game).count(Rgb565::BLACK), 240 * 320);
}

#[test]
fn test_adapter_reports_target_size() {
    let display = GraphicsDisplay::new(FrameBuffer::new(320, 240).unwrap());
    assert_eq!(display.width(), 320);
    assert_eq!(display.height(), 240);
}

#[test]
fn test_repeated_press_with_readout_leaves_pixels_untouched() {
    let display = GraphicsDisplay::new(FrameBuffer::new(240, 320).unwrap());
    let mut game = TicTacToe::new(BoardRenderer::new(display, Palette::default()), true);
    game.start().unwrap();
    game.handle_touch(TouchPoint::new(120, 160)).unwrap();
    let before = framebuffer(&game).clone();

    game.handle_touch(TouchPoint::new(121, 161)).unwrap();
    assert_eq!(framebuffer(&game), &before);
}
