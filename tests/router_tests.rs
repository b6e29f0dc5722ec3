//! Route table tests - resolution, base paths and lazy loading

use std::cell::Cell;
use std::rc::Rc;

use tui_arcade::router::{
    Component, GameView, HomeView, LoadError, MountFn, RouteError, RouteTable, RouteTableError, View,
};
use tui_arcade::types::RouteName;

fn mount_snake(_: &RouteTable) -> Box<dyn View> {
    Box::new(GameView::new(RouteName::Snake))
}

fn mount_home(routes: &RouteTable) -> Box<dyn View> {
    Box::new(HomeView::from_routes(routes))
}

// ============== Default Table ==============

#[test]
fn test_default_routes() {
    let routes = RouteTable::new("/");
    let table: Vec<(&str, RouteName)> = routes
        .entries()
        .iter()
        .map(|e| (e.path.as_str(), e.name))
        .collect();
    assert_eq!(
        table,
        vec![
            ("/", RouteName::Home),
            ("/game/snake", RouteName::Snake),
            ("/game/memory", RouteName::Memory),
            ("/game/tictactoe", RouteName::TicTacToe),
            ("/game/tetris", RouteName::Tetris),
        ]
    );
}

#[test]
fn test_home_is_eager_and_games_are_lazy() {
    let routes = RouteTable::new("/");
    for entry in routes.entries() {
        assert_eq!(entry.component.is_lazy(), entry.name.is_game(), "{}", entry.name);
    }
}

#[test]
fn test_navigate_home_triggers_no_lazy_load() {
    let routes = RouteTable::new("/");
    let view = routes.navigate("/").unwrap();
    assert_eq!(view.route(), RouteName::Home);
    for name in [
        RouteName::Snake,
        RouteName::Memory,
        RouteName::TicTacToe,
        RouteName::Tetris,
    ] {
        assert!(!routes.is_loaded(name), "{} loaded early", name);
    }
}

#[test]
fn test_navigate_tetris_loads_only_tetris() {
    let routes = RouteTable::new("/");
    let view = routes.navigate("/game/tetris").unwrap();
    assert_eq!(view.route(), RouteName::Tetris);
    assert_eq!(view.title(), "Tetris");
    assert!(routes.is_loaded(RouteName::Tetris));
    assert!(!routes.is_loaded(RouteName::Snake));
}

#[test]
fn test_every_game_route_resolves_to_its_view() {
    let routes = RouteTable::new("/");
    for name in RouteName::ALL {
        let view = routes.navigate(name.path()).unwrap();
        assert_eq!(view.route(), name);
    }
}

#[test]
fn test_trailing_slash_query_and_hash() {
    let routes = RouteTable::new("/");
    assert_eq!(
        routes.navigate("/game/memory/").unwrap().route(),
        RouteName::Memory
    );
    assert_eq!(
        routes.navigate("/game/snake?speed=2").unwrap().route(),
        RouteName::Snake
    );
    assert_eq!(
        routes.navigate("/game/tictactoe#board").unwrap().route(),
        RouteName::TicTacToe
    );
}

#[test]
fn test_unknown_path_is_not_found() {
    let routes = RouteTable::new("/");
    let err = routes.navigate("/game/pong").unwrap_err();
    assert!(matches!(err, RouteError::NotFound { ref path } if path == "/game/pong"));
    assert_eq!(err.to_string(), "no route matches `/game/pong`");
}

#[test]
fn test_path_for() {
    let routes = RouteTable::new("/");
    assert_eq!(routes.path_for(RouteName::Tetris), Some("/game/tetris"));
    assert_eq!(routes.path_for(RouteName::Home), Some("/"));
}

// ============== Base Path ==============

#[test]
fn test_base_prefixes_every_route() {
    let routes = RouteTable::new("/arcade");
    assert_eq!(routes.base(), "/arcade/");
    assert_eq!(routes.path_for(RouteName::Home), Some("/arcade/"));
    assert_eq!(
        routes.path_for(RouteName::Tetris),
        Some("/arcade/game/tetris")
    );
    assert_eq!(
        routes.entries()[4].relative_path(),
        "/game/tetris"
    );
}

#[test]
fn test_base_prefixed_navigation() {
    let routes = RouteTable::new("/arcade/");
    assert_eq!(
        routes.navigate("/arcade/game/tetris").unwrap().route(),
        RouteName::Tetris
    );
    assert_eq!(routes.navigate("/arcade").unwrap().route(), RouteName::Home);
    assert_eq!(routes.navigate("/arcade/").unwrap().route(), RouteName::Home);
    assert!(matches!(
        routes.navigate("/game/tetris"),
        Err(RouteError::NotFound { .. })
    ));
}

#[test]
fn test_home_links_resolve_under_base() {
    let routes = RouteTable::new("/arcade");
    let home = routes.navigate("/arcade/").unwrap();
    let description = home.describe();
    let links: Vec<&str> = description
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(links.len(), 4);
    for link in links {
        assert!(link.starts_with("/arcade/game/"), "{link}");
        let view = routes.navigate(link).unwrap();
        assert_eq!(routes.path_for(view.route()), Some(link));
    }
}

// ============== Lazy Loading ==============

#[test]
fn test_lazy_module_loads_once_and_mounts_fresh_views() {
    let loads = Rc::new(Cell::new(0));
    let counter = Rc::clone(&loads);

    let mut routes = RouteTable::empty("/");
    routes
        .add("/", RouteName::Home, Component::Eager(mount_home))
        .unwrap()
        .add(
            "/game/snake",
            RouteName::Snake,
            Component::lazy(move || {
                counter.set(counter.get() + 1);
                Ok(mount_snake as MountFn)
            }),
        )
        .unwrap();

    routes.navigate("/").unwrap();
    assert_eq!(loads.get(), 0);

    let first = routes.navigate("/game/snake").unwrap();
    let second = routes.navigate("/game/snake").unwrap();
    assert_eq!(loads.get(), 1);
    assert_eq!(first.route(), second.route());
}

#[test]
fn test_failed_load_surfaces_error_and_retries() {
    let attempts = Rc::new(Cell::new(0));
    let counter = Rc::clone(&attempts);

    let mut routes = RouteTable::empty("/");
    routes
        .add(
            "/game/snake",
            RouteName::Snake,
            Component::lazy(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 1 {
                    Err(LoadError::new("snake", "module unavailable"))
                } else {
                    Ok(mount_snake as MountFn)
                }
            }),
        )
        .unwrap();

    let err = routes.navigate("/game/snake").unwrap_err();
    match &err {
        RouteError::Load { route, source } => {
            assert_eq!(*route, RouteName::Snake);
            assert_eq!(source.reason, "module unavailable");
        }
        other => panic!("expected load error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "could not open the snake view");
    assert!(!routes.is_loaded(RouteName::Snake));

    let view = routes.navigate("/game/snake").unwrap();
    assert_eq!(view.route(), RouteName::Snake);
    assert_eq!(attempts.get(), 2);
    assert!(routes.is_loaded(RouteName::Snake));
}

// ============== Table Construction ==============

#[test]
fn test_duplicate_path_rejected() {
    let mut routes = RouteTable::empty("/");
    routes
        .add("/game/snake", RouteName::Snake, Component::Eager(mount_snake))
        .unwrap();
    let err = routes
        .add("/game/snake/", RouteName::Memory, Component::Eager(mount_snake))
        .unwrap_err();
    assert_eq!(
        err,
        RouteTableError::DuplicatePath {
            path: "/game/snake".to_string()
        }
    );
    assert_eq!(routes.entries().len(), 1);
}

#[test]
fn test_relative_path_rejected() {
    let mut routes = RouteTable::empty("/");
    let err = routes
        .add("game/snake", RouteName::Snake, Component::Eager(mount_snake))
        .unwrap_err();
    assert!(matches!(err, RouteTableError::InvalidPath { .. }));
}
