#![allow(dead_code)]

use rand::Rng;
use std::sync::Arc;

use trovedb::core::store::Store;
use trovedb::core::types::FieldValue;
use trovedb::schema::record::{FieldSpec, Record};

pub struct TestDoc {
    pub name: String,
    pub age: i64,
}

impl TestDoc {
    pub fn new(name: &str, age: i64) -> Self {
        TestDoc {
            name: name.to_string(),
            age,
        }
    }
}

impl Record for TestDoc {
    fn type_name(&self) -> &'static str {
        "TestDoc"
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

/// Throwaway query shapes; the empty type name keeps them out of the
/// shape cache, the way one-off query structs should behave.
pub struct NameQuery {
    pub name: String,
}

impl NameQuery {
    pub fn new(name: &str) -> Self {
        NameQuery {
            name: name.to_string(),
        }
    }
}

impl Record for NameQuery {
    fn type_name(&self) -> &'static str {
        ""
    }

    fn describe(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::text("Name")]
    }

    fn read_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "Name" => Some(FieldValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

pub struct AgeQuery {
    pub age: i64,
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

pub struct NameAgeQuery {
    pub name: String,
    pub age: i64,
}

impl NameAgeQuery {
    pub fn new(name: &str, age: i64) -> Self {
        NameAgeQuery {
            name: name.to_string(),
            age,
        }
    }
}

impl Record for NameAgeQuery {
    fn type_name(&self) -> &'static str {
        ""
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
}

pub struct EmptyQuery;

impl Record for EmptyQuery {
    fn type_name(&self) -> &'static str {
        ""
    }

    fn describe(&self) -> Vec<FieldSpec> {
        Vec::new()
    }

    fn read_field(&self, _name: &str) -> Option<FieldValue> {
        None
    }
}

/// Insert `n` generated documents one call at a time: names
/// "Test document {i}", random ages with every tenth document pinned to
/// age 50. Returns the summed insert counts.
pub fn seed_documents(store: &Store, n: usize) -> usize {
    let mut rng = rand::thread_rng();
    let mut inserted = 0;
    for i in 0..n {
        let age = if i % 10 == 0 {
            50
        } else {
            rng.gen_range(20..60)
        };
        let doc = TestDoc::new(&format!("Test document {}", i), age);
        let (count, _) = store.insert_one(&doc);
        inserted += count;
    }
    inserted
}

/// Same corpus as `seed_documents`, built up front for batch insertion.
pub fn document_batch(n: usize) -> Vec<TestDoc> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            let age = if i % 10 == 0 {
                50
            } else {
                rng.gen_range(20..60)
            };
            TestDoc::new(&format!("Test document {}", i), age)
        })
        .collect()
}

pub fn ids(docs: &[Arc<trovedb::core::types::Document>]) -> Vec<trovedb::core::types::ObjectId> {
    docs.iter().map(|d| d.id).collect()
}
