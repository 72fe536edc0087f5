use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::io;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use whet::{
    assert_equal, assert_true, check, check_eq, run_test, JsonReporter, OutputFormat, Queue,
    Reporter, Stack, TestFilter, TestHarness, TextReporter,
};

#[derive(Parser)]
#[command(name = "whet")]
#[command(about = "An embeddable unit-test harness with structural comparison")]
#[command(version)]
struct Cli {
    /// Filter tests by name (exact match or /regex/)
    #[arg(long = "test")]
    test_filter: Option<String>,

    /// Output format
    #[arg(long = "output-format", value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// Keep the process alive even when checks fail
    #[arg(long)]
    no_terminate: bool,

    /// Also run the deliberately failing container showcase
    #[arg(long)]
    demo_failures: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "whet=debug" } else { "whet=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    // In JSON mode stderr carries exactly one JSON document, so log lines
    // go to stdout instead.
    if cli.output_format == OutputFormat::Json {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stdout))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
    }

    let suite_label = if cli.demo_failures {
        "self-checks + failing showcase"
    } else {
        "self-checks"
    };
    println!(
        "whet v{} {} {}",
        env!("CARGO_PKG_VERSION"),
        "•".dimmed(),
        suite_label
    );

    let reporter: Box<dyn Reporter> = match cli.output_format {
        OutputFormat::Text => Box::new(TextReporter::stderr()),
        OutputFormat::Json => Box::new(JsonReporter::stderr()),
    };
    let mut harness = TestHarness::with_reporter(reporter, !cli.no_terminate);
    if let Some(pattern) = cli.test_filter.as_deref() {
        let filter = TestFilter::try_from(pattern)
            .map_err(|e| anyhow::anyhow!("Invalid test filter: {}", e))?;
        harness = harness.with_filter(filter);
    }

    run_test!(harness, scalar_checks);
    run_test!(harness, sequence_checks);
    run_test!(harness, map_checks);
    run_test!(harness, adapter_checks);

    if cli.demo_failures {
        run_test!(harness, stack_demo);
        run_test!(harness, queue_demo);
        run_test!(harness, vector_demo);
        run_test!(harness, deque_demo);
        run_test!(harness, list_demo);
        run_test!(harness, set_demo);
        run_test!(harness, hash_set_demo);
        run_test!(harness, map_demo);
        run_test!(harness, hash_map_demo);
    }

    Ok(())
}

fn scalar_checks() -> anyhow::Result<()> {
    assert_equal!(2 + 2, 4)?;
    assert_equal!(String::from("whet"), "whet")?;
    assert_true!(1 < 2, "integer ordering")?;
    check!('a'.is_alphabetic())?;
    Ok(())
}

fn sequence_checks() -> anyhow::Result<()> {
    assert_equal!(vec![1, 2, 3], vec![1, 2, 3])?;
    let deque: VecDeque<i32> = [1, 2].into_iter().collect();
    let other: VecDeque<i32> = [1, 2].into_iter().collect();
    assert_equal!(deque, other)?;
    Ok(())
}

fn map_checks() -> anyhow::Result<()> {
    let mut left = BTreeMap::new();
    left.insert("k", 1);
    let mut right = BTreeMap::new();
    right.insert("k", 1);
    assert_equal!(left, right)?;
    Ok(())
}

fn adapter_checks() -> anyhow::Result<()> {
    let mut a = Stack::new();
    let mut b = Stack::new();
    a.push(1);
    b.push(1);
    check_eq!(a, b)?;
    Ok(())
}

// The showcase below mirrors the classic demo: one pushed element asserted
// equal to an empty container, once per shape, so every failure message
// form is visible in one run.

fn stack_demo() -> anyhow::Result<()> {
    let mut stack_1: Stack<i32> = Stack::new();
    let stack_2: Stack<i32> = Stack::new();
    stack_1.push(1);
    check_eq!(stack_1, stack_2)?;
    Ok(())
}

fn queue_demo() -> anyhow::Result<()> {
    let mut queue_1: Queue<i32> = Queue::new();
    let queue_2: Queue<i32> = Queue::new();
    queue_1.push(1);
    check_eq!(queue_1, queue_2)?;
    Ok(())
}

fn vector_demo() -> anyhow::Result<()> {
    let vector_1 = vec![1];
    let vector_2: Vec<i32> = Vec::new();
    check_eq!(vector_1, vector_2)?;
    Ok(())
}

fn deque_demo() -> anyhow::Result<()> {
    let deque_1: VecDeque<i32> = [1].into_iter().collect();
    let deque_2: VecDeque<i32> = VecDeque::new();
    check_eq!(deque_1, deque_2)?;
    Ok(())
}

fn list_demo() -> anyhow::Result<()> {
    let list_1: LinkedList<i32> = [1].into_iter().collect();
    let list_2: LinkedList<i32> = LinkedList::new();
    check_eq!(list_1, list_2)?;
    Ok(())
}

fn set_demo() -> anyhow::Result<()> {
    let set_1: BTreeSet<i32> = [1].into_iter().collect();
    let set_2: BTreeSet<i32> = BTreeSet::new();
    check_eq!(set_1, set_2)?;
    Ok(())
}

fn hash_set_demo() -> anyhow::Result<()> {
    let set_1: HashSet<i32> = [1].into_iter().collect();
    let set_2: HashSet<i32> = HashSet::new();
    check_eq!(set_1, set_2)?;
    Ok(())
}

fn map_demo() -> anyhow::Result<()> {
    let mut map_1: BTreeMap<i32, i32> = BTreeMap::new();
    map_1.insert(1, 1);
    let map_2: BTreeMap<i32, i32> = BTreeMap::new();
    check_eq!(map_1, map_2)?;
    Ok(())
}

fn hash_map_demo() -> anyhow::Result<()> {
    let mut map_1: HashMap<i32, i32> = HashMap::new();
    map_1.insert(1, 1);
    let map_2: HashMap<i32, i32> = HashMap::new();
    check_eq!(map_1, map_2)?;
    Ok(())
}
