use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use statbot::db::Database;
use statbot::{Comment, DatasetProvider, StatBot};
use statbot_query::{assemble, render, Report, StatValue, Vocabulary};
use std::sync::Arc;

// Parsing is pure CPU work; the end-to-end case adds the dataset lookup and
// the SQLite append, which dominate.

const COMMENT: &str = "Great game tonight, LeBron James !STAT PTS/AST/REB 2003-20 -b";

fn roster() -> Vocabulary {
    let mut names: Vec<String> = (0..500).map(|i| format!("player{} surname{}", i, i)).collect();
    names.push("LeBron James".to_string());
    Vocabulary::new(names, ["PTS", "AST", "REB", "STL", "BLK", "3P", "FG%", "FT%"])
}

fn parsing_benchmark(c: &mut Criterion) {
    let vocab = roster();
    let mut group = c.benchmark_group("parsing");
    group.throughput(Throughput::Bytes(COMMENT.len() as u64));

    group.bench_function("assemble", |b| b.iter(|| assemble(COMMENT, &vocab).unwrap()));

    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let codes: Vec<String> = ["PTS", "AST", "REB"].iter().map(|s| s.to_string()).collect();
    let seasons: Vec<String> = (2003..2020).map(|y| format!("{}-{:02}", y, (y + 1) % 100)).collect();
    let rows: Vec<Vec<StatValue>> = seasons
        .iter()
        .enumerate()
        .map(|(i, _)| vec![StatValue::Float(25.0 + i as f64 / 10.0), StatValue::Int(7), StatValue::Float(7.4)])
        .collect();

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    group.bench_function("both_sides", |b| {
        b.iter(|| {
            render(&Report {
                player_name: "lebron james",
                season_range: "2003-20",
                mode: statbot_query::Mode::Both,
                stat_codes: &codes,
                seasons: &seasons,
                playoffs: &rows,
                regular: &rows,
            })
        })
    });

    group.finish();
}

fn process_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dataset = r#"{"stats": ["PTS", "AST", "REB"], "players": {"lebron james": {
        "2018-19": {"regular": {"PTS": 27.4, "AST": 8.3, "REB": 8.5}},
        "2019-20": {"regular": {"PTS": 25.3, "AST": 10.2, "REB": 7.8},
                    "playoffs": {"PTS": 27.6, "AST": 8.8, "REB": 10.8}}}}}"#;
    let bot = rt.block_on(async {
        let provider = Arc::new(DatasetProvider::from_json(dataset).unwrap());
        let db = Database::new(":memory:").await.unwrap();
        StatBot::new(provider, db, "!STAT").await.unwrap()
    });
    let comment = Comment::new(COMMENT, "https://example.com/c/bench");

    c.bench_function("process", |b| {
        b.to_async(&rt).iter(|| async { bot.process(&comment).await.unwrap() })
    });
}

criterion_group!(benches, parsing_benchmark, render_benchmark, process_benchmark);
criterion_main!(benches);
