/// Complete trovedb API walkthrough
///
/// Demonstrates the major store operations:
/// - Inserting records (single and batch)
/// - Defining secondary indexes (before and after inserts)
/// - Equality queries with pagination
/// - Unmarshalling documents back into records
/// - Statistics
use trovedb::core::store::Store;
use trovedb::core::types::FieldValue;
use trovedb::schema::record::{FieldSpec, Record};

struct Person {
    name: String,
    age: i64,
}

impl Person {
    fn new(name: &str, age: i64) -> Self {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

impl Record for Person {
    fn type_name(&self) -> &'static str {
        "Person"
    }

    fn describe(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::text("Name"), FieldSpec::integer("Age")]
    }

    fn read_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "Name" => Some(FieldValue::Text(self.name.clone())),
            "Age" => Some(FieldValue::Integer(self.age)),
            _ => None,
        }
    }

    fn write_field(&mut self, name: &str, value: &FieldValue) {
        match (name, value) {
            ("Name", FieldValue::Text(s)) => self.name = s.clone(),
            ("Age", FieldValue::Integer(i)) => self.age = *i,
            _ => {}
        }
    }
}

struct AgeQuery {
    age: i64,
}

impl Record for AgeQuery {
    fn type_name(&self) -> &'static str {
        ""
    }

    fn describe(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::integer("Age")]
    }

    fn read_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "Age" => Some(FieldValue::Integer(self.age)),
            _ => None,
        }
    }
}

fn main() {
    env_logger::init();

    println!("trovedb - simple usage demo\n");

    // Step 1: create the store and an index on Name
    println!("Step 1: creating store with an index on Name...");
    let store = Store::new();
    store.new_index(&["Name"]).expect("index on Name");
    println!("  done\n");

    // Step 2: insert documents
    println!("Step 2: inserting people...");
    store.insert_one(&Person::new("Ada", 36));
    store.insert_one(&Person::new("Grace", 45));
    let batch = vec![
        Person::new("Alan", 41),
        Person::new("Edsger", 36),
        Person::new("Barbara", 36),
    ];
    let refs: Vec<&dyn Record> = batch.iter().map(|p| p as &dyn Record).collect();
    let (count, _) = store.insert(&refs);
    println!("  inserted {} in one batch, {} total\n", count, store.len());

    // Step 3: index created after the fact sees existing documents
    println!("Step 3: indexing Age after the inserts...");
    store.new_index(&["Age"]).expect("index on Age");
    let age_index = store.get_index(&["Age"]).unwrap();
    println!("  index {} covers {} documents\n", age_index.name, age_index.count());

    // Step 4: queries
    println!("Step 4: querying...");
    let (total, page) = store.find(&AgeQuery { age: 36 }, 0, 10);
    println!("  Age == 36: {} matches", total);
    for doc in &page {
        let mut person = Person::new("", 0);
        doc.unmarshal(&mut person);
        println!("    {} ({})", person.name, person.age);
    }

    match store.find_one(&AgeQuery { age: 99 }, 0) {
        Some(_) => println!("  Age == 99: unexpected match"),
        None => println!("  Age == 99: no match"),
    }
    println!();

    // Step 5: statistics
    println!("Step 5: statistics...");
    let stats = store.stats();
    println!(
        "  {} documents, {} indexes",
        stats.total_documents, stats.index_count
    );
    for index in &stats.indexes {
        println!("    {} -> {} installs", index.name, index.count);
    }
}
