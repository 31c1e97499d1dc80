#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    nimbus_launcher_lib::run()
}
