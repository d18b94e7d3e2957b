use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::store::enums::store_engine::StoreEngine;

const NAME_REGEX: &str = r"^[a-z_][a-z0-9_]{0,30}$";
const MAX_UPDATE_LOCKS: u64 = 256;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(1);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval: 60,
                peers_timeout: 86400,
                peers_scan_limit: 160,
                tracker_id: String::from("tg snapshot tracker"),
                serialize_updates: true,
                update_locks: 256,
            },
            store: StoreConfig {
                engine: StoreEngine::sqlite3,
                path: String::from("sqlite://peers.db"),
                table_name: String::from("peers"),
                max_connections: 5,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    real_ip: String::new(),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads,
                    ssl: false,
                    ssl_key: String::new(),
                    ssl_cert: String::new(),
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start the tracker again, exiting now...", path);
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("[STORE] Table", &self.store.table_name, NAME_REGEX)?;

        let check_map = [
            ("[TRACKER] request_interval", self.tracker_config.request_interval),
            ("[TRACKER] peers_timeout", self.tracker_config.peers_timeout),
            ("[TRACKER] peers_scan_limit", self.tracker_config.peers_scan_limit),
            ("[TRACKER] update_locks", self.tracker_config.update_locks),
            ("[STORE] max_connections", self.store.max_connections as u64),
        ];
        for (name, value) in check_map {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("Error checking {} [:] must be greater than zero", name)));
            }
        }

        // Shards are picked by the last key byte.
        if self.tracker_config.update_locks > MAX_UPDATE_LOCKS {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking [TRACKER] update_locks [:] must not exceed {}", MAX_UPDATE_LOCKS
            )));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}
