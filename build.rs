fn main() {
    // ESP-IDF sysenv propagation for target builds. Host builds (library,
    // tests, simulation) have no IDF environment to propagate.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
