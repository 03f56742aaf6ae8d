use super::Db;

use quill_core::{bail, err, Driver, Result};
use quill_sql::{Flavor, Serializer};
use std::{sync::Arc, time::Duration};
use url::Url;

#[derive(Debug, Default)]
pub struct Builder {
    /// Statement compiler; picks the flavor
    serializer: Option<Serializer>,

    /// Per-call command timeout
    command_timeout: Option<Duration>,
}

impl Builder {
    /// Use the default serializer for `flavor`.
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.serializer = Some(Serializer::new(flavor));
        self
    }

    /// Select the flavor from a connection URL's scheme, e.g.
    /// `postgres://localhost/app` or `sqlite::memory:`.
    pub fn flavor_from_url(&mut self, url: &str) -> Result<&mut Self> {
        let url = Url::parse(url).map_err(anyhow::Error::from)?;

        let flavor = match url.scheme() {
            "sqlite" => Flavor::Sqlite,
            "postgres" | "postgresql" => Flavor::Postgresql,
            "mysql" => Flavor::Mysql,
            "sqlserver" | "mssql" => Flavor::SqlServer,
            scheme => bail!("unsupported database scheme `{scheme}`"),
        };

        Ok(self.flavor(flavor))
    }

    /// Use a configured serializer, e.g. one with a naming strategy.
    pub fn serializer(&mut self, serializer: Serializer) -> &mut Self {
        self.serializer = Some(serializer);
        self
    }

    pub fn command_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.command_timeout = Some(timeout);
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let serializer = self
            .serializer
            .clone()
            .ok_or_else(|| err!("no database flavor configured"))?;

        Ok(Db {
            driver: Arc::new(driver),
            serializer,
            command_timeout: self.command_timeout,
        })
    }
}
