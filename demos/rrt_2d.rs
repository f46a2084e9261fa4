//! RRT Path Planning Demo
//!
//! Grows a tree through a 2D obstacle course and renders the tree and the
//! resulting path with gnuplot.

use gnuplot::{AxesCommon, Caption, Color, Figure};

use rrt_planners::{BallObstacle, ObstacleField, Space, State, RRT};

fn main() {
    println!("RRT path planning start!!");

    // Obstacles (x, y, radius)
    let obstacle_list = vec![
        (5.0, 5.0, 1.0),
        (3.0, 6.0, 2.0),
        (3.0, 8.0, 2.0),
        (3.0, 10.0, 2.0),
        (7.0, 5.0, 2.0),
        (9.0, 5.0, 2.0),
        (8.0, 10.0, 1.0),
    ];

    let obstacles = obstacle_list
        .iter()
        .map(|&(x, y, radius)| BallObstacle::new(State::new(vec![x, y]), radius))
        .collect();
    let field = ObstacleField::new(Space::cube(2, -2.0, 15.0), obstacles, 0.1);

    let mut planner = RRT::new(
        2,    // dim
        3000, // max_sampling_num
        0.05, // goal_sampling_rate
        1.0,  // expand_dist
    )
    .expect("planner parameters are valid");
    planner.set_constraint(field);

    let start = State::new(vec![0.0, 0.0]);
    let goal = State::new(vec![6.0, 10.0]);

    match planner.solve(&start, &goal) {
        Ok(true) => {
            println!("Found path with {} points!", planner.result().len());
            visualize(&planner, &obstacle_list, &start, &goal);
        }
        Ok(false) => println!("Cannot find path"),
        Err(e) => println!("Planning failed: {}", e),
    }

    println!("RRT path planning finish!!");
}

fn visualize(
    planner: &RRT<ObstacleField>,
    obstacle_list: &[(f64, f64, f64)],
    start: &State,
    goal: &State,
) {
    let mut fg = Figure::new();
    let axes = fg.axes2d();

    // Plot obstacles
    let obs_x: Vec<f64> = obstacle_list.iter().map(|obs| obs.0).collect();
    let obs_y: Vec<f64> = obstacle_list.iter().map(|obs| obs.1).collect();
    axes.points(&obs_x, &obs_y, &[Caption("Obstacles"), Color("black")]);

    // Plot tree
    for node in planner.tree() {
        if let Some(parent_index) = node.parent {
            let parent = &planner.tree()[parent_index];
            axes.lines(
                &[parent.state[0], node.state[0]],
                &[parent.state[1], node.state[1]],
                &[Color("blue")],
            );
        }
    }

    // Plot path
    let path_x: Vec<f64> = planner.result().iter().map(|s| s[0]).collect();
    let path_y: Vec<f64> = planner.result().iter().map(|s| s[1]).collect();
    axes.lines(&path_x, &path_y, &[Caption("RRT Path"), Color("red")]);

    // Plot start and goal
    axes.points(&[start[0]], &[start[1]], &[Caption("Start"), Color("green")]);
    axes.points(&[goal[0]], &[goal[1]], &[Caption("Goal"), Color("blue")]);

    axes.set_title("RRT Path Planning", &[])
        .set_x_label("X [m]", &[])
        .set_y_label("Y [m]", &[])
        .set_aspect_ratio(gnuplot::AutoOption::Fix(1.0));

    let output_path = "rrt_result.png";
    fg.save_to_png(output_path, 800, 600).unwrap();
    println!("Plot saved to: {}", output_path);
}
