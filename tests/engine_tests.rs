use std::path::Path;

use draftboard::{
    calculate_score, is_valid_placement, load_characters_from_json, score_cell, Board, BoardConfig,
    Character, ConnectionRule, DraftCard, Rarity, ScoreTable, Tag,
};
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

fn ch(id: u16, name: &str, tags: Vec<Tag>, season: u16, show: &str, couple: Option<&str>) -> Character {
    Character {
        id,
        name: name.to_string(),
        tags,
        season,
        show: show.to_string(),
        couple: couple.map(str::to_string),
    }
}

fn two_slot_config() -> BoardConfig {
    BoardConfig::custom(
        "pair",
        vec![None, Some(Tag::Uk)],
        vec![(0, 1)],
        ScoreTable::default(),
    )
    .expect("well-formed test config")
}

#[test]
fn empty_board_scores_zero() {
    let config = BoardConfig::griddy9();
    let board = Board::new(&config);
    let breakdown = calculate_score(&config, &board);

    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.slot_points, 0);
    assert_eq!(breakdown.rarity_points, 0);
    assert_eq!(breakdown.connection_points, 0);
    assert!(breakdown.couple_edges.is_empty());
    assert!(!breakdown.all_filled);
    assert!(!breakdown.all_valid);
    for cell in &breakdown.cells {
        assert_eq!(cell.valid, None, "empty cells are null-valid, not invalid");
        assert_eq!(cell.total(), 0);
    }
}

#[test]
fn two_slot_show_season_combo_hand_computed() {
    // Wildcard slot 0, Uk-required slot 1, one edge. Same show + season,
    // not a couple. With the default table: slot [0, 2]; connection on each
    // side = show 2 + season 1 + combo 2 = 5; rarity 0 (both Common).
    let config = two_slot_config();
    let a = DraftCard::new(ch(1, "Ada", vec![Tag::Usa], 2, "Island Hearts", None), Rarity::Common);
    let b = DraftCard::new(ch(2, "Bea", vec![Tag::Uk], 2, "Island Hearts", None), Rarity::Common);

    let mut board = Board::new(&config);
    board.place(0, a).unwrap();
    board.place(1, b).unwrap();

    let cell0 = score_cell(&config, &board, 0);
    let cell1 = score_cell(&config, &board, 1);
    assert_eq!(cell0.slot_points, 0, "wildcard slots award nothing");
    assert_eq!(cell1.slot_points, 2);
    assert_eq!(cell0.connection_points, 5);
    assert_eq!(cell1.connection_points, 5);
    assert_eq!(cell0.total(), 5);
    assert_eq!(cell1.total(), 7);
    assert_eq!(
        cell0.connections[0].rules,
        vec![ConnectionRule::ShowMatch, ConnectionRule::SeasonMatch, ConnectionRule::Combo]
    );

    let breakdown = calculate_score(&config, &board);
    assert_eq!(breakdown.slot_points, 2);
    assert_eq!(breakdown.rarity_points, 0);
    assert_eq!(breakdown.connection_points, 10);
    assert_eq!(breakdown.total, 12);
    assert!(breakdown.all_filled);
    assert!(breakdown.all_valid);
    assert!(breakdown.couple_edges.is_empty());
}

#[test]
fn couple_bonus_stacks_on_top_and_dedupes() {
    // Couple across different shows and seasons: couple bonus only.
    let config = two_slot_config();
    let a = DraftCard::new(
        ch(1, "Poppy", vec![Tag::Uk], 1, "Love Harbour", Some("Dexter")),
        Rarity::Uncommon,
    );
    let b = DraftCard::new(ch(2, "Dexter", vec![Tag::Uk], 2, "Villa Nova", None), Rarity::Rare);

    let mut board = Board::new(&config);
    board.place(0, a).unwrap();
    board.place(1, b).unwrap();

    let breakdown = calculate_score(&config, &board);
    // couple 4 on each side, rarity 1 + 3, slot 2 on slot 1
    assert_eq!(breakdown.connection_points, 8);
    assert_eq!(breakdown.rarity_points, 4);
    assert_eq!(breakdown.slot_points, 2);
    assert_eq!(breakdown.total, 14);
    // Recorded from both endpoints, reported once.
    assert_eq!(breakdown.couple_edges, vec![(0, 1)]);
    assert_eq!(
        breakdown.cells[0].connections[0].rules,
        vec![ConnectionRule::Couple]
    );
}

#[test]
fn couple_plus_show_and_season_points_are_additive() {
    let config = two_slot_config();
    let a = DraftCard::new(
        ch(1, "Lucia", vec![Tag::Spain], 3, "Villa Nova", Some("Mateo")),
        Rarity::Common,
    );
    let b = DraftCard::new(
        ch(2, "Mateo", vec![Tag::Uk, Tag::Spain], 3, "Villa Nova", Some("Lucia")),
        Rarity::Common,
    );

    let mut board = Board::new(&config);
    board.place(0, a).unwrap();
    board.place(1, b).unwrap();

    let cell0 = score_cell(&config, &board, 0);
    // show 2 + season 1 + combo 2 + couple 4
    assert_eq!(cell0.connection_points, 9);
    assert_eq!(
        cell0.connections[0].rules,
        vec![
            ConnectionRule::ShowMatch,
            ConnectionRule::SeasonMatch,
            ConnectionRule::Combo,
            ConnectionRule::Couple
        ]
    );
}

#[test]
fn zero_point_relations_are_not_recorded() {
    let config = two_slot_config();
    let a = DraftCard::new(ch(1, "Freja", vec![Tag::Sweden], 1, "Midnight Sun", None), Rarity::Common);
    let b = DraftCard::new(ch(2, "Jack", vec![Tag::Uk], 2, "Castaway Court", None), Rarity::Common);

    let mut board = Board::new(&config);
    board.place(0, a).unwrap();
    board.place(1, b).unwrap();

    let breakdown = calculate_score(&config, &board);
    assert_eq!(breakdown.connection_points, 0);
    assert!(breakdown.cells.iter().all(|c| c.connections.is_empty()));
}

#[test]
fn requirement_violation_clears_all_valid() {
    let config = two_slot_config();
    let a = DraftCard::new(ch(1, "Ada", vec![Tag::Usa], 1, "Island Hearts", None), Rarity::Common);
    let b = DraftCard::new(ch(2, "Bea", vec![Tag::Usa], 2, "Island Hearts", None), Rarity::Common);

    assert!(is_valid_placement(&config, &a, 0), "wildcard accepts anything");
    assert!(!is_valid_placement(&config, &b, 1));

    let mut board = Board::new(&config);
    board.place(0, a).unwrap();
    board.place(1, b).unwrap();

    let breakdown = calculate_score(&config, &board);
    assert!(breakdown.all_filled);
    assert!(!breakdown.all_valid);
    assert_eq!(breakdown.cells[1].valid, Some(false));
    assert_eq!(breakdown.cells[1].slot_points, 0);
}

fn data_pool() -> Vec<Character> {
    load_characters_from_json(Path::new("data/characters.json"))
        .expect("failed to load characters.json")
        .to_pool()
}

fn random_filled_board(config: &BoardConfig, pool: &[Character], rng: &mut Pcg64) -> Board {
    let mut pool = pool.to_vec();
    pool.shuffle(rng);

    let mut board = Board::new(config);
    for (slot, character) in pool.into_iter().take(config.slot_count()).enumerate() {
        let rarity = match rng.gen_range(0..4) {
            0 => Rarity::Common,
            1 => Rarity::Uncommon,
            2 => Rarity::Rare,
            _ => Rarity::Legendary,
        };
        board.place(slot, DraftCard::new(character, rarity)).unwrap();
    }
    board
}

#[test]
fn connection_points_are_symmetric_across_every_edge() {
    let config = BoardConfig::griddy9();
    let pool = data_pool();
    let mut rng = Pcg64::seed_from_u64(0xFEED_FACE);

    for _ in 0..50 {
        let board = random_filled_board(&config, &pool, &mut rng);
        let breakdown = calculate_score(&config, &board);
        for &(i, j) in config.edges() {
            let forward = breakdown.cells[i as usize]
                .connections
                .iter()
                .find(|c| c.to == j)
                .map(|c| c.points);
            let backward = breakdown.cells[j as usize]
                .connections
                .iter()
                .find(|c| c.to == i)
                .map(|c| c.points);
            assert_eq!(forward, backward, "edge ({i},{j}) scored asymmetrically");
        }
    }
}

#[test]
fn connection_total_double_counts_each_edge() {
    let config = BoardConfig::griddy9();
    let mut rng = Pcg64::seed_from_u64(17);
    let board = random_filled_board(&config, &data_pool(), &mut rng);
    let breakdown = calculate_score(&config, &board);

    let per_cell_sum: u32 = breakdown.cells.iter().map(|c| c.connection_points).sum();
    assert_eq!(breakdown.connection_points, per_cell_sum);
    assert_eq!(per_cell_sum % 2, 0, "every edge contributes to both endpoints");
}

#[test]
fn calculate_score_is_idempotent() {
    let config = BoardConfig::griddy9();
    let mut rng = Pcg64::seed_from_u64(4);
    let board = random_filled_board(&config, &data_pool(), &mut rng);
    assert_eq!(calculate_score(&config, &board), calculate_score(&config, &board));
}

#[test]
fn grid12_config_shape() {
    let config = BoardConfig::grid12();
    assert_eq!(config.slot_count(), 12);
    assert_eq!(config.edges().len(), 17);
    // every slot has at least one neighbor
    for slot in 0..config.slot_count() {
        assert!(!config.neighbors(slot).is_empty());
    }
}

#[test]
fn griddy9_config_shape() {
    let config = BoardConfig::griddy9();
    assert_eq!(config.slot_count(), 9);
    assert_eq!(config.edges().len(), 16);
    // center touches everything
    assert_eq!(config.neighbors(4), &[0, 1, 2, 3, 5, 6, 7, 8]);
}
