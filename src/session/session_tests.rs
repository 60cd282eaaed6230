/*
 * Unit tests for the operator session
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_prompt_rejects_out_of_range
 *  - test_prompt_end_of_input
 *  - test_complete_building_asks_only_missing
 *  - test_scripted_journey
 *  - test_no_available_elevator_reprompts
 *  - test_json_rendering
 *  - test_text_rendering
 *  - test_step_time_paces_every_floor
 *  - test_zero_step_time_is_unpaced
 *  - test_text_marks_moving_elevator
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod session_tests {
    use crate::config::{BuildingConfig, OutputFormat};
    use crate::session::render::write_status;
    use crate::session::{complete_building, CallOutcome, Prompter, Renderer, Session};
    use crate::shared::{ElevatorId, Leg, SystemSnapshot};
    use crate::system::System;
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn session(system: System, script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(system, prompter(script), Renderer::new(OutputFormat::Text, Duration::ZERO))
    }

    #[test]
    fn test_prompt_rejects_out_of_range() {
        // Arrange
        let mut p = prompter("0\neleven\n11\n7\n");

        // Act
        let floor = p.floor_number(10).unwrap();

        // Assert
        assert_eq!(floor, Some(7));
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Invalid floor number. Please enter a number between 1 and 10.").count(), 3);
    }

    #[test]
    fn test_prompt_end_of_input() {
        // Arrange
        let mut p = prompter("-3\n");

        // Act & Assert
        assert_eq!(p.waiting_count(4).unwrap(), None);
        assert!(!p.run_again().unwrap());
    }

    #[test]
    fn test_complete_building_asks_only_missing() {
        // Arrange
        let mut p = prompter("x\n0\n12\n");
        let mut building = BuildingConfig {
            n_elevators: 2,
            top_floor: 0,
            capacity: 6,
            seed: None,
        };

        // Act
        let complete = complete_building(&mut p, &mut building).unwrap();

        // Assert
        assert!(complete);
        assert_eq!(building.top_floor, 12);
        assert_eq!(building.n_elevators, 2);
        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(!output.contains("Enter the number of elevators"));
        assert_eq!(output.matches("Invalid input. Please enter a positive integer.").count(), 2);
    }

    #[test]
    fn test_scripted_journey() {
        // Arrange: call from floor 6 with 2 people, ride to floor 1, then quit
        let system = System::with_floors(&[5, 8], 10, 4);
        let mut session = session(system, "6\n2\n1\nq\n");

        // Act
        session.run().unwrap();

        // Assert
        let (system, prompter) = session.into_parts();
        let elevator = system.elevator(ElevatorId(1)).unwrap();
        assert_eq!(elevator.current_floor(), 1);
        assert_eq!(elevator.occupancy(), 0);
        assert!(!elevator.is_moving());
        assert_eq!(system.elevator(ElevatorId(2)).unwrap().current_floor(), 8);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Elevator 1 has arrived at your floor 6."));
        assert!(output.contains("Elevator 1 is now at floor 6."));
        assert!(output.contains("Elevator 1 has arrived at your floor 1 with 2 person/people."));
    }

    #[test]
    fn test_no_available_elevator_reprompts() {
        // Arrange: elevator 1 is caught moving up past floor 5
        let mut system = System::with_floors(&[4], 10, 4);
        let elevator = &mut system.elevators_mut()[0];
        elevator.begin_leg(9, 0);
        elevator.step();
        let mut session = session(system, "2\n1\n");

        // Act
        let outcome = session.serve_call().unwrap();
        let next = session.serve_call().unwrap();

        // Assert
        assert_eq!(outcome, CallOutcome::NoElevator);
        assert_eq!(next, CallOutcome::InputClosed);
        let (_, prompter) = session.into_parts();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("No available elevators. Please try again later."));
    }

    #[test]
    fn test_json_rendering() {
        // Arrange
        let system = System::with_floors(&[3], 10, 4);
        let renderer = Renderer::new(OutputFormat::Json, Duration::ZERO);
        let mut out = Vec::new();

        // Act
        renderer.render(&mut out, &system.snapshot()).unwrap();

        // Assert
        let line = String::from_utf8(out).unwrap();
        let parsed: SystemSnapshot = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed, system.snapshot());
        assert!(line.contains("\"currentFloor\":3"));
        assert!(line.contains("\"behaviour\":\"idle\""));
    }

    #[test]
    fn test_text_rendering() {
        // Arrange
        let system = System::with_floors(&[3, 7], 10, 4);
        let mut out = Vec::new();

        // Act
        write_status(&mut out, &system.snapshot()).unwrap();

        // Assert
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Elevator Status:");
        assert_eq!(
            lines[2],
            "2. Current Floor: 7, Destination Floor: 7, People inside: 0, Capacity: 4, Direction: Up, Moving Status: Stopped"
        );
    }

    #[test]
    fn test_step_time_paces_every_floor() {
        // Arrange
        let step = Duration::from_millis(5);
        let mut system = System::with_floors(&[1], 10, 4);
        let mut renderer = Renderer::new(OutputFormat::Json, step);
        let mut out = Vec::new();

        // Act
        renderer.begin_leg();
        let start = Instant::now();
        let floors = system
            .run(ElevatorId(1), Leg::pickup(1, 5), |s| renderer.render_step(&mut out, s).unwrap())
            .unwrap();
        let elapsed = start.elapsed();

        // Assert
        assert!(renderer.is_paced());
        assert_eq!(floors, 4);
        assert!(elapsed >= step * 4, "leg took {:?}", elapsed);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_zero_step_time_is_unpaced() {
        // Arrange
        let mut renderer = Renderer::new(OutputFormat::Text, Duration::ZERO);
        let mut system = System::with_floors(&[1], 10, 4);
        let mut out = Vec::new();

        // Act
        renderer.begin_leg();
        system
            .run(ElevatorId(1), Leg::pickup(1, 10), |s| renderer.render_step(&mut out, s).unwrap())
            .unwrap();

        // Assert
        assert!(!renderer.is_paced());
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("please wait"));
    }

    #[test]
    fn test_text_marks_moving_elevator() {
        // Arrange
        let mut system = System::with_floors(&[2, 6], 10, 4);
        let mut renderer = Renderer::new(OutputFormat::Text, Duration::from_millis(1));
        let mut frames = Vec::new();

        // Act
        renderer.begin_leg();
        system
            .run(ElevatorId(1), Leg::pickup(2, 3), |s| {
                let mut out = Vec::new();
                renderer.render_step(&mut out, s).unwrap();
                frames.push(String::from_utf8(out).unwrap());
            })
            .unwrap();

        // Assert: one frame while moving, one after arrival
        assert_eq!(frames.len(), 2);
        assert!(frames[0].contains("> 1. Current Floor: 3, Destination Floor: 3"));
        assert!(frames[0].contains("Moving Status: Moving"));
        assert!(frames[0].contains("\n2. Current Floor: 6"));
        assert!(frames[0].contains("Simulating elevator movement at 1 ms/floor, please wait . . ."));
        assert!(frames[1].contains("\n1. Current Floor: 3"));
        assert!(!frames[1].contains("please wait"));
    }
}
