//! End-to-end parsing and rendering of sample comments.

use statbot_query::{
    assemble, render, Mode, QueryError, Report, SeasonType, StatValue, Vocabulary,
};

fn vocab() -> Vocabulary {
    Vocabulary::new(
        ["LeBron James", "Stephen Curry", "Kevin Durant"],
        ["PTS", "AST", "REB", "3P", "FG%"],
    )
}

/// Fabricated rows: one tuple per season, values derived from the indices.
fn rows(seasons: &[String], codes: &[String], side: SeasonType) -> Vec<Vec<StatValue>> {
    let base = match side {
        SeasonType::Regular => 0,
        SeasonType::Playoffs => 100,
    };
    (0..seasons.len())
        .map(|i| {
            (0..codes.len())
                .map(|j| StatValue::Int(base + (i * 10 + j) as i64))
                .collect()
        })
        .collect()
}

fn render_query(body: &str) -> String {
    let query = assemble(body, &vocab()).unwrap();
    let seasons = query.season_range.season_labels();
    let playoffs = if query.mode.sides().contains(&SeasonType::Playoffs) {
        rows(&seasons, &query.stat_codes, SeasonType::Playoffs)
    } else {
        Vec::new()
    };
    let regular = if query.mode.sides().contains(&SeasonType::Regular) {
        rows(&seasons, &query.stat_codes, SeasonType::Regular)
    } else {
        Vec::new()
    };
    render(&Report {
        player_name: &query.player_name,
        season_range: query.season_range.as_str(),
        mode: query.mode,
        stat_codes: &query.stat_codes,
        seasons: &seasons,
        playoffs: &playoffs,
        regular: &regular,
    })
}

#[test]
fn lebron_points_and_assists() {
    let query = assemble("LeBron James !STAT PTS/AST 2019-20", &vocab()).unwrap();
    assert_eq!(query.player_name, "lebron james");
    assert_eq!(query.stat_codes, vec!["PTS", "AST"]);
    assert_eq!(query.season_range.as_str(), "2019-20");
    assert_eq!(query.mode, Mode::Regular);
}

#[test]
fn curry_playoff_threes() {
    let query = assemble("!STAT Stephen Curry 3P 2018-19 -p", &vocab()).unwrap();
    assert_eq!(query.mode, Mode::Playoffs);

    let text = render_query("!STAT Stephen Curry 3P 2018-19 -p");
    assert!(text.contains("Playoffs:"));
    assert!(!text.contains("Regular Season:"));
    assert!(text.starts_with("Stephen Curry's stats for 2018-19:"));
}

#[test]
fn durant_century_rollover_rejected() {
    assert_eq!(
        assemble("Kevin Durant PTS 1999-00", &vocab()),
        Err(QueryError::SeasonRangeNotFound)
    );
}

#[test]
fn missing_stat_token() {
    assert_eq!(
        assemble("!STAT Kevin Durant 2015-17 please", &vocab()),
        Err(QueryError::StatNotFound)
    );
}

#[test]
fn every_row_has_one_column_per_code_plus_season() {
    let text = render_query("!STAT lebron james pts/ast/reb 2015-19 -both");
    let codes = 3;

    let table_lines: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();
    // two sections, each header + separator + 4 seasons
    assert_eq!(table_lines.len(), 2 * (2 + 4));
    for line in table_lines {
        assert_eq!(line.split('|').filter(|c| !c.is_empty()).count(), codes + 1, "{line}");
    }
    assert_eq!(text.matches("Season|PTS|AST|REB").count(), 2);
    assert_eq!(text.matches("-|-|-|-|").count(), 2);
}

#[test]
fn rendering_is_idempotent() {
    let body = "Stephen Curry !STAT FG%/3P 2014-17 -b";
    assert_eq!(render_query(body), render_query(body));
}
