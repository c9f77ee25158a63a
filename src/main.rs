use clap::Parser;
use single_linked_list::SingleLinkedList;

/// Command-line options for the demo. Values are applied in this order: build,
/// push-front, pop, insert-front.
#[derive(Parser, Debug)]
#[command(about = "Build a singly linked list and run a few operations on it")]
struct CmdOptions {
    /// Initial values, kept in the order given
    values: Vec<i64>,
    /// Push this value onto the front (repeatable)
    #[arg(long)]
    push_front: Vec<i64>,
    /// Number of elements to pop from the front
    #[arg(long, default_value = "0")]
    pop: usize,
    /// Insert this value after the before-begin position
    #[arg(long)]
    insert_front: Option<i64>,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();

    let mut list: SingleLinkedList<i64> = options.values.iter().copied().collect();
    log::info!("built {:?} (size {})", list, list.get_size());

    for value in &options.push_front {
        list.push_front(*value);
        log::debug!("push_front {} -> {:?}", value, list);
    }

    if options.pop > list.get_size() {
        log::error!(
            "cannot pop {} elements from a list of {}",
            options.pop,
            list.get_size()
        );
        std::process::exit(1);
    }
    for _ in 0..options.pop {
        if let Some(value) = list.pop_front() {
            log::debug!("pop_front {} -> {:?}", value, list);
        }
    }

    if let Some(value) = options.insert_front {
        list.before_begin_mut().insert_after(value);
        log::debug!("insert_after before-begin {} -> {:?}", value, list);
    }

    let snapshot = list.clone();
    let sorted = {
        let mut values: Vec<i64> = list.iter().copied().collect();
        values.sort();
        SingleLinkedList::from(values)
    };
    log::info!(
        "copy equal: {}, sorted copy lesser-or-equal: {}",
        snapshot == list,
        sorted <= list
    );

    println!("{}", list);
    println!("size: {}", list.get_size());
}
