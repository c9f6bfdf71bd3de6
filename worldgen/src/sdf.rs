//! SDF snippets for the generated worlds

use maze::{Point, WallSegment};
use thiserror::Error;

const WORLD_END: &str = "</world>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdfError {
    #[error("the document has no closing `</world>` tag")]
    MissingWorldEnd,
}

/// Decimals needed to keep wall positions apart
///
/// Wall centers sit on a lattice of half the shortest wall length, so the
/// rounding step is kept at least ten times finer, and never coarser than
/// millimeters.
/// ```
/// use maze::MazeConfig;
/// use worldgen::sdf::pose_decimals;
///
/// let (_, walls) = MazeConfig::default().generate().unwrap();
/// assert_eq!(pose_decimals(&walls), 3);
/// ```
pub fn pose_decimals(walls: &[WallSegment]) -> usize {
    let shortest = walls
        .iter()
        .map(|w| w.length)
        .filter(|l| l.is_finite() && *l > 0.)
        .fold(f64::INFINITY, f64::min);
    if !shortest.is_finite() {
        return 3;
    }
    let needed = (-(shortest / 2.).log10()).ceil() + 1.;
    (needed.max(3.) as usize).min(MAX_POSE_DECIMALS)
}

const MAX_POSE_DECIMALS: usize = 15;

/// A static box model for one wall
///
/// The position is written with `decimals` decimals, see [`pose_decimals`].
pub fn wall_model(index: usize, wall: &WallSegment, decimals: usize) -> String {
    let WallSegment {
        position: Point { x, y },
        length,
        orientation,
        thickness,
        height,
    } = *wall;
    let z = height / 2.;
    format!(
        r#"
    <model name="wall_{index}">
      <static>true</static>
      <link name="link">
        <collision name="collision">
          <geometry>
            <box>
              <size>{length} {thickness} {height}</size>
            </box>
          </geometry>
        </collision>
        <visual name="visual">
          <geometry>
            <box>
              <size>{length} {thickness} {height}</size>
            </box>
          </geometry>
        </visual>
      </link>
      <pose>{x:.decimals$} {y:.decimals$} {z} 0 0 {orientation:.4}</pose>
    </model>
    "#
    )
}

/// A red glowing sphere with a temperature sensor
///
/// Coordinates are written with `precision` decimals.
pub fn heat_source_model(index: usize, Point { x, y }: Point, precision: usize) -> String {
    format!(
        r#"
    <model name='heat_source_{index}'>
        <static>true</static>
        <pose>{x:.precision$} {y:.precision$} 0 0 0 0</pose>
        <link name='link'>
            <visual name='visual'>
                <geometry>
                    <sphere>
                        <radius>0.2</radius>
                    </sphere>
                </geometry>
                <material>
                    <ambient>1 0 0 1</ambient>
                </material>
            </visual>
            <sensor type="temperature" name="heat_sensor_{index}">
                <always_on>1</always_on>
                <update_rate>10</update_rate>
                <temperature>
                    <ambient>80</ambient>
                    <variance>2.0</variance>
                </temperature>
            </sensor>
        </link>
        <light name='heat_source_light_{index}' type='point'>
            <pose>0 0 1 0 0 0</pose>
            <diffuse>1 0 0 1</diffuse>
            <specular>0.1 0.1 0.1 1</specular>
            <attenuation>
                <range>5</range>
                <constant>0.5</constant>
                <linear>0.01</linear>
                <quadratic>0.001</quadratic>
            </attenuation>
        </light>
    </model>
    "#
    )
}

/// A complete world holding the maze walls
pub fn maze_world(walls: &[WallSegment]) -> String {
    let decimals = pose_decimals(walls);
    log::debug!("Writing wall poses with {decimals} decimals");
    let walls = walls
        .iter()
        .enumerate()
        .map(|(i, w)| wall_model(i, w, decimals))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" ?>
<sdf version="1.6">
  <world name="prim_maze_world">

    <!-- Plugins -->
    <plugin filename="gz-sim-physics-system" name="gz::sim::systems::Physics"/>
    <plugin filename="gz-sim-user-commands-system" name="gz::sim::systems::UserCommands"/>
    <plugin filename="gz-sim-scene-broadcaster-system" name="gz::sim::systems::SceneBroadcaster"/>
    <plugin filename="gz-sim-sensors-system" name="gz::sim::systems::Sensors">
      <render_engine>ogre2</render_engine>
    </plugin>
    <plugin filename="gz-sim-imu-system" name="gz::sim::systems::Imu"/>

    <!-- Basic Environment (Fuel URIs) -->
    <include>
      <uri>https://fuel.gazebosim.org/1.0/OpenRobotics/models/Ground Plane</uri>
    </include>
    <include>
      <uri>https://fuel.gazebosim.org/1.0/OpenRobotics/models/Sun</uri>
    </include>

    <!-- Maze Walls -->
    {walls}

    <!-- Camera Configuration -->
    <gui fullscreen="0">
      <camera name="user_camera">
        <pose>0 0 10 0 1.5708 0</pose>
        <view_controller>orbit</view_controller>
      </camera>
    </gui>

    <!-- Physics Configuration -->
    <physics type="ode">
      <real_time_update_rate>1000.0</real_time_update_rate>
      <max_step_size>0.001</max_step_size>
      <real_time_factor>1</real_time_factor>
    </physics>

  </world>
</sdf>
"#
    )
}

/// Insert `blocks` right before the last closing world tag
///
/// Any earlier `</world>` is left untouched.
pub fn insert_before_world_end(document: &str, blocks: &[String]) -> Result<String, SdfError> {
    let end = document.rfind(WORLD_END).ok_or(SdfError::MissingWorldEnd)?;
    let (head, tail) = document.split_at(end);
    Ok(format!("{head}{}\n{tail}", blocks.join("\n")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use maze::{
        geometry::{ALONG_X, ALONG_Y},
        MazeConfig,
    };

    use super::*;

    fn segment(x: f64, y: f64, orientation: f64) -> WallSegment {
        WallSegment {
            position: Point::new(x, y),
            length: 0.5,
            orientation,
            thickness: 0.1,
            height: 1.,
        }
    }

    #[test]
    fn wall_pose_and_size() {
        let model = wall_model(7, &segment(0.25, -0.5, ALONG_Y), 3);
        assert!(model.contains(r#"<model name="wall_7">"#));
        assert!(model.contains("<pose>0.250 -0.500 0.5 0 0 1.5708</pose>"));
        assert_eq!(model.matches("<size>0.5 0.1 1</size>").count(), 2);

        let model = wall_model(0, &segment(-1., 0., ALONG_X), 3);
        assert!(model.contains("<pose>-1.000 0.000 0.5 0 0 0.0000</pose>"));
    }

    #[test]
    fn small_cells_keep_poses_apart() {
        let config = MazeConfig {
            seed: 5,
            grid_size: 8,
            cell_size: 0.001,
            wall_thickness: 0.0001,
            ..Default::default()
        };
        let (_, walls) = config.generate().unwrap();
        let decimals = pose_decimals(&walls);
        assert_eq!(decimals, 5);
        let poses: HashSet<_> = walls
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let model = wall_model(i, w, decimals);
                let start = model.find("<pose>").unwrap();
                let end = model.find("</pose>").unwrap();
                model[start..end].to_owned()
            })
            .collect();
        assert_eq!(poses.len(), walls.len());
    }

    #[test]
    fn default_cells_keep_millimeters() {
        assert_eq!(pose_decimals(&[segment(0., 0., ALONG_X)]), 3);
        assert_eq!(pose_decimals(&[]), 3);
        let world = maze_world(&[segment(0.25, 0., ALONG_X)]);
        assert!(world.contains("<pose>0.250 0.000 0.5 0 0 0.0000</pose>"));
    }

    #[test]
    fn heat_source_names_and_pose() {
        let model = heat_source_model(2, Point::new(1.25, -0.5), 2);
        assert!(model.contains("<model name='heat_source_2'>"));
        assert!(model.contains(r#"name="heat_sensor_2""#));
        assert!(model.contains("<light name='heat_source_light_2' type='point'>"));
        assert!(model.contains("<pose>1.25 -0.50 0 0 0 0</pose>"));
    }

    #[test]
    fn world_holds_every_wall() {
        let walls = [segment(0., 0., ALONG_X), segment(1., 0., ALONG_Y)];
        let world = maze_world(&walls);
        assert!(world.starts_with("<?xml"));
        assert_eq!(world.matches("<model name=\"wall_").count(), 2);
        assert_eq!(world.matches(WORLD_END).count(), 1);
    }

    #[test]
    fn blocks_go_before_world_end() {
        let document = "<sdf><world>walls</world></sdf>";
        let out = insert_before_world_end(document, &["a".into(), "b".into()]).unwrap();
        assert_eq!(out, "<sdf><world>wallsa\nb\n</world></sdf>");
    }

    #[test]
    fn only_last_world_end_receives_blocks() {
        let document = "<world>a</world><world>b</world>";
        let out = insert_before_world_end(document, &["x".into()]).unwrap();
        assert_eq!(out, "<world>a</world><world>bx\n</world>");
    }

    #[test]
    fn document_without_world_is_rejected() {
        assert_eq!(
            insert_before_world_end("<sdf/>", &["a".into()]),
            Err(SdfError::MissingWorldEnd)
        );
    }
}
