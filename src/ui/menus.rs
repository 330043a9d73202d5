//! Title and game-over screens. Enter starts (or restarts) a match.

use bevy::prelude::*;

use crate::core::{GameOver, GameState};

/// Marker for menu UI entities.
#[derive(Component)]
struct MenuUi;

/// Marker for the UI camera used outside of matches.
#[derive(Component)]
struct MenuCamera;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// Setup menu systems.
pub fn setup_menu_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Menu), setup_main_menu)
        .add_systems(OnExit(GameState::Menu), cleanup_menu)
        .add_systems(
            Update,
            start_on_enter.run_if(in_state(GameState::Menu).or(in_state(GameState::GameOver))),
        )
        .add_systems(Update, setup_game_over)
        .add_systems(OnExit(GameState::GameOver), cleanup_game_over);
}

fn title(text: &str, font_size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(30.0)),
            ..default()
        },
    )
}

fn setup_main_menu(mut commands: Commands) {
    commands.spawn((Camera2d, MenuCamera));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            MenuUi,
        ))
        .with_children(|parent| {
            parent.spawn(title("BOT ARENA", 80.0, Color::srgb(0.85, 0.75, 0.6)));
            parent.spawn(title(
                "WASD move  /  Mouse aim  /  LMB fire  /  RMB scope  /  R reload",
                20.0,
                Color::srgb(0.55, 0.55, 0.6),
            ));
            parent.spawn(title("Press Enter to start", 28.0, Color::srgb(0.8, 0.8, 0.85)));
        });
}

/// Show the final kill count once the session reports game over.
fn setup_game_over(mut commands: Commands, mut events: EventReader<GameOver>) {
    let Some(report) = events.read().last() else {
        return;
    };

    // Draw over the (frozen) match camera
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        MenuCamera,
    ));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.0, 0.0, 0.85)),
            GameOverUi,
        ))
        .with_children(|parent| {
            parent.spawn(title("YOU DIED", 72.0, Color::srgb(0.8, 0.2, 0.2)));
            parent.spawn(title(
                &format!("Kills: {}", report.kills),
                32.0,
                Color::srgb(0.85, 0.85, 0.85),
            ));
            parent.spawn(title("Press Enter to play again", 24.0, Color::srgb(0.7, 0.7, 0.75)));
        });
}

fn start_on_enter(keyboard: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
    }
}

fn cleanup_menu(
    mut commands: Commands,
    ui_query: Query<Entity, With<MenuUi>>,
    camera_query: Query<Entity, With<MenuCamera>>,
) {
    for entity in ui_query.iter().chain(camera_query.iter()) {
        commands.entity(entity).despawn_recursive();
    }
}

fn cleanup_game_over(
    mut commands: Commands,
    ui_query: Query<Entity, With<GameOverUi>>,
    camera_query: Query<Entity, With<MenuCamera>>,
) {
    for entity in ui_query.iter().chain(camera_query.iter()) {
        commands.entity(entity).despawn_recursive();
    }
}
