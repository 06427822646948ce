mod utils;

use std::collections::HashSet;

use swiss_tournament::swiss::RankingRow;
use utils::{fresh_service, register_all};

fn find(rows: &[RankingRow], id: i32) -> &RankingRow {
    rows.iter().find(|r| r.id == id).expect("player should be ranked")
}

#[test]
fn new_players_start_with_an_empty_record() {
    let service = fresh_service();
    register_all(&service, &["Ada Lovelace", "Grace Hopper", "Alan Turing"]);

    let standings = service.player_standings().unwrap();

    assert_eq!(standings.len(), 3);
    assert!(standings.iter().all(|r| r.wins == 0 && r.games == 0));
}

#[test]
fn count_tracks_registrations() {
    let service = fresh_service();
    assert_eq!(service.count_players().unwrap(), 0);

    register_all(&service, &["Ada", "Ada"]);

    assert_eq!(service.count_players().unwrap(), 2);
    assert_eq!(
        service.player_standings().unwrap().len() as i64,
        service.count_players().unwrap()
    );
}

#[test]
fn registration_assigns_distinct_ids() {
    let service = fresh_service();
    let players = register_all(&service, &["Same Name", "Same Name"]);

    assert_ne!(players[0].id, players[1].id);
    assert_eq!(service.list_players().unwrap(), players);
}

#[test]
fn reporting_a_match_updates_only_the_two_players() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada", "Grace", "Alan", "Edsger"]);
    let (winner, loser) = (players[2].id, players[0].id);

    service.report_match(winner, loser).unwrap();
    let standings = service.player_standings().unwrap();

    assert_eq!(find(&standings, winner).wins, 1);
    assert_eq!(find(&standings, winner).games, 1);
    assert_eq!(find(&standings, loser).wins, 0);
    assert_eq!(find(&standings, loser).games, 1);
    for untouched in [players[1].id, players[3].id] {
        assert_eq!(find(&standings, untouched).wins, 0);
        assert_eq!(find(&standings, untouched).games, 0);
    }
    assert_eq!(standings[0].id, winner);
}

#[test]
fn wins_never_exceed_games() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada", "Grace", "Alan", "Edsger"]);
    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();

    for (winner, loser) in [(0, 1), (2, 3), (0, 2), (1, 3), (3, 0)] {
        service.report_match(ids[winner], ids[loser]).unwrap();
    }

    let standings = service.player_standings().unwrap();
    assert!(standings.iter().all(|r| r.wins <= r.games));
    assert_eq!(standings.iter().map(|r| r.wins).sum::<i32>(), 5);
    assert_eq!(standings.iter().map(|r| r.games).sum::<i32>(), 10);
}

#[test]
fn self_play_counts_as_one_game() {
    let service = fresh_service();
    let players = register_all(&service, &["Narcissus"]);

    service.report_match(players[0].id, players[0].id).unwrap();

    let standings = service.player_standings().unwrap();
    assert_eq!(standings[0].wins, 1);
    assert_eq!(standings[0].games, 1);
}

#[test]
fn tied_leaders_are_reordered_by_win_ratio() {
    let service = fresh_service();
    let players = register_all(&service, &["Bea", "Abe", "Cid", "Dot"]);
    let (bea, abe, cid, dot) = (players[0].id, players[1].id, players[2].id, players[3].id);

    // Bea: 2 wins in 3 games, Abe: 2 wins in 2 games.
    service.report_match(bea, cid).unwrap();
    service.report_match(bea, dot).unwrap();
    service.report_match(cid, bea).unwrap();
    service.report_match(abe, dot).unwrap();
    service.report_match(abe, cid).unwrap();

    let standings = service.player_standings().unwrap();
    let order: Vec<i32> = standings.iter().map(|r| r.id).collect();

    assert_eq!(order, vec![abe, bea, cid, dot]);
    assert_eq!((standings[0].wins, standings[0].games), (2, 2));
    assert_eq!((standings[1].wins, standings[1].games), (2, 3));
}

#[test]
fn players_without_games_rank_last_after_a_tie_break() {
    let service = fresh_service();
    let players = register_all(&service, &["Idle", "Ann", "Ben", "Cal", "Dee"]);
    let (idle, ann, ben, cal, dee) = (
        players[0].id,
        players[1].id,
        players[2].id,
        players[3].id,
        players[4].id,
    );

    service.report_match(ann, cal).unwrap();
    service.report_match(ben, dee).unwrap();

    let standings = service.player_standings().unwrap();
    let order: Vec<i32> = standings.iter().map(|r| r.id).collect();

    assert_eq!(order, vec![ann, ben, cal, dee, idle]);
    let last = standings.last().unwrap();
    assert_eq!((last.wins, last.games), (0, 0));
}

#[test]
fn pairings_keep_the_win_order_even_when_standings_tie_break() {
    let service = fresh_service();
    let players = register_all(&service, &["Bea", "Abe", "Cid", "Dot"]);
    let (bea, abe, cid, dot) = (players[0].id, players[1].id, players[2].id, players[3].id);

    service.report_match(bea, cid).unwrap();
    service.report_match(bea, dot).unwrap();
    service.report_match(cid, bea).unwrap();
    service.report_match(abe, dot).unwrap();
    service.report_match(abe, cid).unwrap();

    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 2);
    assert_eq!((pairings[0].id1, pairings[0].id2), (bea, abe));
    assert_eq!((pairings[1].id1, pairings[1].id2), (cid, dot));
    assert_eq!(pairings[0].name1, "Bea");
    assert_eq!(pairings[0].name2, "Abe");
}

#[test]
fn no_tie_break_without_wins() {
    let service = fresh_service();
    let players = register_all(&service, &["First", "Second", "Third"]);

    let standings = service.player_standings().unwrap();
    let order: Vec<i32> = standings.iter().map(|r| r.id).collect();

    assert_eq!(order, players.iter().map(|p| p.id).collect::<Vec<_>>());
}

#[test]
fn standings_for_tiny_tables_do_not_fail() {
    let service = fresh_service();
    assert!(service.player_standings().unwrap().is_empty());

    register_all(&service, &["Solo"]);
    let standings = service.player_standings().unwrap();
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].name, "Solo");
}

#[test]
fn even_fields_pair_every_player_once_with_neighbours() {
    let service = fresh_service();
    let players = register_all(&service, &["P1", "P2", "P3", "P4", "P5", "P6"]);
    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();

    service.report_match(ids[0], ids[1]).unwrap();
    service.report_match(ids[2], ids[3]).unwrap();
    service.report_match(ids[4], ids[5]).unwrap();
    service.report_match(ids[0], ids[2]).unwrap();

    let standings = service.player_standings().unwrap();
    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 3);
    let paired: HashSet<i32> = pairings.iter().flat_map(|p| [p.id1, p.id2]).collect();
    assert_eq!(paired.len(), 6);
    for (i, pairing) in pairings.iter().enumerate() {
        assert_eq!(pairing.id1, standings[2 * i].id);
        assert_eq!(pairing.id2, standings[2 * i + 1].id);
    }
}

#[test]
fn empty_single_and_odd_fields_produce_no_pairings() {
    let service = fresh_service();
    assert!(service.swiss_pairings().unwrap().is_empty());

    register_all(&service, &["One"]);
    assert!(service.swiss_pairings().unwrap().is_empty());

    register_all(&service, &["Two"]);
    assert_eq!(service.swiss_pairings().unwrap().len(), 1);

    register_all(&service, &["Three"]);
    assert!(service.swiss_pairings().unwrap().is_empty());
}

#[test]
fn registration_strips_disallowed_markup() {
    let service = fresh_service();

    let stripped = service.register_player("<img src=x onerror=alert(1)>Bobby <b>Tables</b>").unwrap();
    let kept = service.register_player("Bobby<br>Tables").unwrap();

    assert_eq!(stripped.name, "Bobby Tables");
    assert_eq!(kept.name, "Bobby<br>Tables");

    let names: Vec<String> = service
        .player_standings()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Bobby Tables", "Bobby<br>Tables"]);
}

#[test]
fn deleting_matches_resets_every_record() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada", "Grace"]);
    service.report_match(players[0].id, players[1].id).unwrap();

    service.delete_matches().unwrap();

    let standings = service.player_standings().unwrap();
    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|r| r.wins == 0 && r.games == 0));
    assert!(service.list_matches().unwrap().is_empty());
}

#[test]
fn deleting_players_empties_the_roster() {
    let service = fresh_service();
    register_all(&service, &["Ada", "Grace", "Alan"]);

    service.delete_players().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
    assert!(service.player_standings().unwrap().is_empty());
}

#[test]
fn deleting_players_with_recorded_matches_fails() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada", "Grace"]);
    service.report_match(players[0].id, players[1].id).unwrap();

    assert!(service.delete_players().is_err());
    assert_eq!(service.count_players().unwrap(), 2);

    service.delete_matches().unwrap();
    service.delete_players().unwrap();
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn reporting_unknown_players_surfaces_a_storage_error() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada"]);

    assert!(service.report_match(players[0].id, 9999).is_err());
    assert!(service.list_matches().unwrap().is_empty());
}

#[test]
fn match_log_keeps_report_order() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada", "Grace"]);

    service.report_match(players[0].id, players[1].id).unwrap();
    service.report_match(players[1].id, players[0].id).unwrap();

    let log = service.list_matches().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!((log[0].winner, log[0].loser), (players[0].id, players[1].id));
    assert_eq!((log[1].winner, log[1].loser), (players[1].id, players[0].id));
}

#[test]
fn reset_drops_all_data_and_keeps_the_schema_usable() {
    let service = fresh_service();
    let players = register_all(&service, &["Ada", "Grace"]);
    service.report_match(players[0].id, players[1].id).unwrap();

    service.reset().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
    assert!(service.list_matches().unwrap().is_empty());
    let again = service.register_player("Alan").unwrap();
    assert_eq!(again.name, "Alan");
}

#[test]
fn initialize_is_idempotent() {
    let service = fresh_service();
    register_all(&service, &["Ada"]);

    service.initialize().unwrap();

    assert_eq!(service.count_players().unwrap(), 1);
}
