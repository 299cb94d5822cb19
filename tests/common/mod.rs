#![allow(dead_code)]

pub mod schema;

use std::{cell::RefCell, rc::Rc};

use topn::{
    Connection, ConnectionConfig, OrmError, Result, RowCursor, Slot, Statement, Transport,
    Value, fill_slot,
};

/// Stage at which the scripted transport should fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailAt {
    Open,
    Prepare,
    Query,
    /// Fail while scanning the given 1-based row.
    Scan(usize),
}

/// What the transport saw, shared with the test after the store took
/// ownership of the transport.
#[derive(Debug, Default)]
pub struct Log {
    pub connection_strings: Vec<String>,
    pub prepared: Vec<String>,
    pub opened: usize,
    pub closed: usize,
}

/// In-memory transport that replays a fixed result set for every statement.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    rows: Rc<Vec<Vec<Value>>>,
    fail: Option<FailAt>,
    log: Rc<RefCell<Log>>,
}

impl MemoryTransport {
    pub fn with_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows: Rc::new(rows),
            ..Self::default()
        }
    }

    pub fn failing(fail: FailAt) -> Self {
        Self {
            fail: Some(fail),
            ..Self::default()
        }
    }

    pub fn fail_at(mut self, fail: FailAt) -> Self {
        self.fail = Some(fail);
        self
    }

    pub fn log(&self) -> Rc<RefCell<Log>> {
        Rc::clone(&self.log)
    }
}

impl Transport for MemoryTransport {
    type Connection = MemoryConnection;

    fn open(&self, config: &ConnectionConfig) -> Result<MemoryConnection> {
        self.log
            .borrow_mut()
            .connection_strings
            .push(config.connection_string());
        if self.fail == Some(FailAt::Open) {
            return Err(OrmError::Connection("server unreachable".into()));
        }
        self.log.borrow_mut().opened += 1;
        Ok(MemoryConnection {
            rows: Rc::clone(&self.rows),
            fail: self.fail,
            log: Rc::clone(&self.log),
        })
    }
}

pub struct MemoryConnection {
    rows: Rc<Vec<Vec<Value>>>,
    fail: Option<FailAt>,
    log: Rc<RefCell<Log>>,
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.log.borrow_mut().closed += 1;
    }
}

impl Connection for MemoryConnection {
    type Statement<'c>
        = MemoryStatement<'c>
    where
        Self: 'c;

    fn prepare(&mut self, sql: &str) -> Result<MemoryStatement<'_>> {
        self.log.borrow_mut().prepared.push(sql.to_string());
        if self.fail == Some(FailAt::Prepare) {
            return Err(OrmError::Prepare("syntax error".into()));
        }
        Ok(MemoryStatement { conn: self })
    }
}

pub struct MemoryStatement<'c> {
    conn: &'c MemoryConnection,
}

impl Statement for MemoryStatement<'_> {
    type Cursor<'s>
        = MemoryCursor<'s>
    where
        Self: 's;

    fn query(&mut self) -> Result<MemoryCursor<'_>> {
        if self.conn.fail == Some(FailAt::Query) {
            return Err(OrmError::Execution("deadlock victim".into()));
        }
        let fail_row = match self.conn.fail {
            Some(FailAt::Scan(row)) => Some(row),
            _ => None,
        };
        Ok(MemoryCursor {
            rows: &self.conn.rows,
            pos: 0,
            fail_row,
        })
    }
}

pub struct MemoryCursor<'s> {
    rows: &'s [Vec<Value>],
    pos: usize,
    fail_row: Option<usize>,
}

impl RowCursor for MemoryCursor<'_> {
    fn next(&mut self) -> Result<bool> {
        if self.pos < self.rows.len() {
            self.pos += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn scan_into(&mut self, slots: &mut [Slot]) -> Result<()> {
        if self.fail_row == Some(self.pos) {
            return Err(OrmError::RowScan(format!("corrupt row {}", self.pos)));
        }
        let row = &self.rows[self.pos - 1];
        for (slot, value) in slots.iter_mut().zip(row.iter().cloned()) {
            fill_slot(slot, value)?;
        }
        Ok(())
    }
}

pub fn config() -> ConnectionConfig {
    ConnectionConfig::new("dbHost", "dbuser", "dbPasswd", "dbname")
}

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}
