#![allow(dead_code)]

use biblia::db::db::VerseStore;
use biblia::libs::kv::{KeyValueStore, MemoryStore, SharedStore, StorageError};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::io;
use std::path::Path;
use std::sync::Arc;

/// `(name, abbreviation, chapters)` for the 66 books in canon order.
pub const CANON: [(&str, &str, u32); 66] = [
    ("Génesis", "Gn", 50),
    ("Éxodo", "Ex", 40),
    ("Levítico", "Lv", 27),
    ("Números", "Nm", 36),
    ("Deuteronomio", "Dt", 34),
    ("Josué", "Jos", 24),
    ("Jueces", "Jue", 21),
    ("Rut", "Rt", 4),
    ("1 Samuel", "1S", 31),
    ("2 Samuel", "2S", 24),
    ("1 Reyes", "1R", 22),
    ("2 Reyes", "2R", 25),
    ("1 Crónicas", "1Cr", 29),
    ("2 Crónicas", "2Cr", 36),
    ("Esdras", "Esd", 10),
    ("Nehemías", "Neh", 13),
    ("Ester", "Est", 10),
    ("Job", "Job", 42),
    ("Salmos", "Sal", 150),
    ("Proverbios", "Pr", 31),
    ("Eclesiastés", "Ec", 12),
    ("Cantares", "Cnt", 8),
    ("Isaías", "Is", 66),
    ("Jeremías", "Jer", 52),
    ("Lamentaciones", "Lm", 5),
    ("Ezequiel", "Ez", 48),
    ("Daniel", "Dn", 12),
    ("Oseas", "Os", 14),
    ("Joel", "Jl", 3),
    ("Amós", "Am", 9),
    ("Abdías", "Abd", 1),
    ("Jonás", "Jon", 4),
    ("Miqueas", "Mi", 7),
    ("Nahúm", "Nah", 3),
    ("Habacuc", "Hab", 3),
    ("Sofonías", "Sof", 3),
    ("Hageo", "Hag", 2),
    ("Zacarías", "Zac", 14),
    ("Malaquías", "Mal", 4),
    ("Mateo", "Mt", 28),
    ("Marcos", "Mr", 16),
    ("Lucas", "Lc", 24),
    ("Juan", "Jn", 21),
    ("Hechos", "Hch", 28),
    ("Romanos", "Ro", 16),
    ("1 Corintios", "1Co", 16),
    ("2 Corintios", "2Co", 13),
    ("Gálatas", "Gá", 6),
    ("Efesios", "Ef", 6),
    ("Filipenses", "Fil", 4),
    ("Colosenses", "Col", 4),
    ("1 Tesalonicenses", "1Ts", 5),
    ("2 Tesalonicenses", "2Ts", 3),
    ("1 Timoteo", "1Ti", 6),
    ("2 Timoteo", "2Ti", 4),
    ("Tito", "Tit", 3),
    ("Filemón", "Flm", 1),
    ("Hebreos", "He", 13),
    ("Santiago", "Stg", 5),
    ("1 Pedro", "1P", 5),
    ("2 Pedro", "2P", 3),
    ("1 Juan", "1Jn", 5),
    ("2 Juan", "2Jn", 1),
    ("3 Juan", "3Jn", 1),
    ("Judas", "Jud", 1),
    ("Apocalipsis", "Ap", 22),
];

pub const TOTAL_CHAPTERS: u32 = 1189;
pub const VERSES_PER_CHAPTER: u32 = 2;

pub const JUAN: u32 = 43;
pub const JUAN_3_16: &str = "Porque de tal manera amó Dios al mundo, que ha dado a su Hijo unigénito";

const SCHEMA: &str = "
    CREATE TABLE testament (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE book (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        abbreviation TEXT,
        testament_id INTEGER NOT NULL REFERENCES testament(id)
    );
    CREATE TABLE verse (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        book_id INTEGER NOT NULL REFERENCES book(id),
        chapter INTEGER NOT NULL,
        verse INTEGER NOT NULL,
        text TEXT NOT NULL
    );
    INSERT INTO testament (id, name) VALUES (1, 'Antiguo Testamento'), (2, 'Nuevo Testamento');
";

/// Text of the generated verse `verse` of `chapter`.
pub fn verse_text(book_name: &str, chapter: u32, verse: u32) -> String {
    format!("Texto de {} {}:{}", book_name, chapter, verse)
}

/// Fills `conn` with every book and chapter of the canon, two generated
/// verses per chapter, plus Juan 3:16 and a few verses for search tests.
pub fn populate(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    {
        let mut insert_book = tx.prepare("INSERT INTO book (id, name, abbreviation, testament_id) VALUES (?1, ?2, ?3, ?4)")?;
        let mut insert_verse = tx.prepare("INSERT INTO verse (book_id, chapter, verse, text) VALUES (?1, ?2, ?3, ?4)")?;

        for (index, (name, abbreviation, chapters)) in CANON.iter().enumerate() {
            let book_id = index as u32 + 1;
            let testament_id = if book_id <= 39 { 1 } else { 2 };
            insert_book.execute(params![book_id, name, abbreviation, testament_id])?;

            for chapter in 1..=*chapters {
                for verse in 1..=VERSES_PER_CHAPTER {
                    insert_verse.execute(params![book_id, chapter, verse, verse_text(name, chapter, verse)])?;
                }
            }
        }

        insert_verse.execute(params![JUAN, 3, 16, JUAN_3_16])?;
        insert_verse.execute(params![1, 1, 3, "Y dijo Dios: Sea la luz; y fue la luz."])?;
        insert_verse.execute(params![46, 13, 3, "y si no tengo AMOR, de nada me sirve."])?;
        insert_verse.execute(params![62, 4, 8, "El que no ama, no ha conocido a Dios; porque Dios es amor."])?;
    }
    tx.commit()
}

/// In-memory verse store with the full canon.
pub fn memory_store() -> VerseStore {
    let mut conn = Connection::open_in_memory().unwrap();
    populate(&mut conn).unwrap();
    VerseStore::from_connection(conn).unwrap()
}

/// Writes the full canon to a database file at `path`.
pub fn write_database(path: &Path) {
    let mut conn = Connection::open(path).unwrap();
    populate(&mut conn).unwrap();
    conn.close().unwrap();
}

enum WriteFailure {
    Never,
    Always,
    Key(String),
}

/// In-memory user-data store whose writes can be made to fail on demand.
/// Reads always succeed.
pub struct FailingStore {
    inner: MemoryStore,
    failure: Mutex<WriteFailure>,
}

impl FailingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(FailingStore {
            inner: MemoryStore::new(),
            failure: Mutex::new(WriteFailure::Never),
        })
    }

    pub fn shared(self: &Arc<Self>) -> SharedStore {
        self.clone()
    }

    /// Every `set` and `remove` fails until [`FailingStore::recover`].
    pub fn fail_writes(&self) {
        *self.failure.lock() = WriteFailure::Always;
    }

    /// Only writes to `key` fail.
    pub fn fail_writes_to(&self, key: &str) {
        *self.failure.lock() = WriteFailure::Key(key.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock() = WriteFailure::Never;
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        let fails = match &*self.failure.lock() {
            WriteFailure::Never => false,
            WriteFailure::Always => true,
            WriteFailure::Key(failing) => failing == key,
        };
        if fails {
            return Err(StorageError::Io(io::Error::new(io::ErrorKind::Other, "disk full")));
        }
        Ok(())
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.remove(key)
    }
}
