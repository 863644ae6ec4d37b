use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationType {
    RandomAccess,
    OneToOne,
    OneToMany,
    Optimal,
    Compare,
    RunAll,
    Exit,
}

impl SimulationType {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SimulationType::RandomAccess),
            "2" => Some(SimulationType::OneToOne),
            "3" => Some(SimulationType::OneToMany),
            "4" => Some(SimulationType::Optimal),
            "5" => Some(SimulationType::Compare),
            "6" => Some(SimulationType::RunAll),
            "0" => Some(SimulationType::Exit),
            _ => None,
        }
    }
}

pub struct SimulatorInterface;

impl SimulatorInterface {
    pub fn new() -> Self {
        Self
    }

    pub fn get_menu_text(&self) -> &'static str {
        "Available sweeps:\n  1. Random access\n  2. One-to-one matching\n  3. One-to-many matching\n  4. Optimal mechanism\n  5. Compare all protocols\n  6. Run all sweeps\n  0. Exit"
    }

    pub fn show_menu(&self) {
        println!("=== HarvestMAC Simulator ===");
        println!("{}", self.get_menu_text());
    }

    pub fn get_user_choice(&self) -> Option<SimulationType> {
        print!("\nSelect sweep (1-6): ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).expect("Failed to read input");

        SimulationType::from_input(&input)
    }

    /// Menu loop: prompt until a valid choice, run the registered sweep for
    /// it, and exit after one completed run
    pub async fn run(&self) -> Result<(), String> {
        loop {
            self.show_menu();

            match self.get_user_choice() {
                Some(SimulationType::Exit) => {
                    println!("Exiting...");
                    break;
                }
                Some(choice) => {
                    let registry = crate::registry::get_registry().await;
                    let registry = registry.lock().await;
                    let entry = registry
                        .get(&choice)
                        .ok_or_else(|| format!("No sweep registered for {:?}", choice))?;

                    if let Err(e) = (entry.run_fn)().await {
                        return Err(format!("{} failed: {}", entry.name, e));
                    }

                    println!("{} completed successfully!", entry.name);
                    break;
                }
                None => {
                    println!("Invalid choice. Please enter 1, 2, 3, 4, 5, 6, or 0 to exit.");
                    println!("{}", self.get_menu_text());
                }
            }
        }

        Ok(())
    }
}
