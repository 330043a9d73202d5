//! In-game HUD - health, ammo, kills and the flash/scope overlays.

use bevy::prelude::*;

use crate::combat::Health;
use crate::core::{GameState, HudCues};
use crate::player::{AimState, Player};
use crate::session::Session;

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

#[derive(Component)]
pub struct HealthText;

#[derive(Component)]
pub struct AmmoText;

#[derive(Component)]
pub struct KillsText;

/// Shown when the magazine is empty.
#[derive(Component)]
pub struct ReloadPrompt;

/// Full-screen red tint while the damage flash is active.
#[derive(Component)]
pub struct DamageOverlay;

/// Dark frame around the crosshair while scoped.
#[derive(Component)]
pub struct ScopeOverlay;

/// Muzzle flash glow under the crosshair.
#[derive(Component)]
pub struct MuzzleFlashGlow;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_hud)
        .add_systems(OnExit(GameState::Playing), cleanup_hud)
        .add_systems(
            Update,
            (
                update_health,
                update_ammo,
                update_kills,
                update_overlays,
            )
                .run_if(in_state(GameState::Playing)),
        );
}

fn hud_text(font_size: f32) -> (TextFont, TextColor) {
    (
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
    )
}

fn full_screen() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        position_type: PositionType::Absolute,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Overlays first so the readouts draw on top
    commands.spawn((
        full_screen(),
        BackgroundColor(Color::srgba(0.8, 0.0, 0.0, 0.35)),
        Visibility::Hidden,
        DamageOverlay,
        HudRoot,
    ));

    commands
        .spawn((full_screen(), Visibility::Hidden, ScopeOverlay, HudRoot))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Vh(70.0),
                    height: Val::Vh(70.0),
                    border: UiRect::all(Val::Px(3.0)),
                    ..default()
                },
                BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
                BorderRadius::MAX,
                Outline::new(Val::Vw(100.0), Val::ZERO, Color::BLACK),
            ));
        });

    // Health (bottom-left)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((Text::new("Health 100"), hud_text(18.0), HealthText));
            parent
                .spawn((
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(12.0),
                        margin: UiRect::top(Val::Px(5.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.8, 0.2, 0.2)),
                        HealthBar,
                    ));
                });
        });

    // Ammo and kills (bottom-right)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::End,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((Text::new("Kills 0"), hud_text(18.0), KillsText));
            parent.spawn((Text::new("30 / 30"), hud_text(28.0), AmmoText));
        });

    // Crosshair, reload prompt and muzzle glow (center)
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                ..full_screen()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            ));
            parent.spawn((
                Node {
                    width: Val::Px(18.0),
                    height: Val::Px(18.0),
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 0.8, 0.3, 0.8)),
                BorderRadius::MAX,
                Visibility::Hidden,
                MuzzleFlashGlow,
            ));
            parent.spawn((
                Text::new("Press R to reload"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.6, 0.2)),
                Node {
                    margin: UiRect::top(Val::Px(10.0)),
                    ..default()
                },
                Visibility::Hidden,
                ReloadPrompt,
            ));
        });
}

fn update_health(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
    mut text_query: Query<&mut Text, With<HealthText>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };

    if let Ok(mut bar) = bar_query.get_single_mut() {
        bar.width = Val::Percent(health.percentage() * 100.0);
    }
    if let Ok(mut text) = text_query.get_single_mut() {
        **text = format!("Health {}", health.current());
    }
}

fn update_ammo(
    session: Res<Session>,
    mut text_query: Query<&mut Text, With<AmmoText>>,
    mut prompt_query: Query<&mut Visibility, With<ReloadPrompt>>,
) {
    if !session.is_changed() {
        return;
    }

    if let Ok(mut text) = text_query.get_single_mut() {
        **text = format!("{} / {}", session.ammo(), session.max_ammo());
    }
    if let Ok(mut visibility) = prompt_query.get_single_mut() {
        *visibility = if session.ammo() == 0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

fn update_kills(session: Res<Session>, mut text_query: Query<&mut Text, With<KillsText>>) {
    if let Ok(mut text) = text_query.get_single_mut() {
        if session.is_changed() {
            **text = format!("Kills {}", session.kills());
        }
    }
}

fn update_overlays(
    cues: Res<HudCues>,
    aim_query: Query<&AimState, With<Player>>,
    mut overlays: ParamSet<(
        Query<&mut Visibility, With<DamageOverlay>>,
        Query<&mut Visibility, With<ScopeOverlay>>,
        Query<&mut Visibility, With<MuzzleFlashGlow>>,
    )>,
) {
    let shown = |active: bool| {
        if active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        }
    };

    for mut visibility in overlays.p0().iter_mut() {
        visibility.set_if_neq(shown(cues.damage_flash.is_active()));
    }

    let scoped = aim_query.get_single().is_ok_and(|aim| aim.scoped);
    for mut visibility in overlays.p1().iter_mut() {
        visibility.set_if_neq(shown(scoped));
    }

    for mut visibility in overlays.p2().iter_mut() {
        visibility.set_if_neq(shown(cues.muzzle_flash.is_active()));
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
